use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use voc2yolo::darknet_cfg::update_config_file;
use voc2yolo::UpdateCfgArgs;

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = UpdateCfgArgs::parse();

    let cfg_path = PathBuf::from(&args.input);
    let names_path = PathBuf::from(&args.names_file);

    match update_config_file(&cfg_path, &names_path) {
        Ok(classes) => info!(
            "Updated {} for {} classes.",
            cfg_path.display(),
            classes
        ),
        Err(e) => {
            error!("Failed to update config: {}", e);
            std::process::exit(1);
        }
    }
}

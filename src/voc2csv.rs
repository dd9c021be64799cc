use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use voc2yolo::{process_csv_dataset, Args};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let input_dir = PathBuf::from(&args.input_dir);
    if !input_dir.exists() {
        error!("The specified input_dir does not exist: {}", args.input_dir);
        return;
    }

    info!("Starting VOC to CSV conversion...");

    if let Err(e) = process_csv_dataset(&args) {
        error!("Failed to process dataset: {}", e);
        std::process::exit(1);
    }
    info!("Conversion process completed successfully.");
}

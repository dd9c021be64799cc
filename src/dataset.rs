//! Conversion pipelines
//!
//! Both pipelines are two-phase: first parse every configured split and
//! accumulate the class vocabulary, then assign ids and emit. Ids can only
//! be assigned once the whole corpus has been seen, otherwise a class that
//! appears late would shift earlier ids.

use dashmap::DashSet;
use log::info;
use std::path::Path;

use crate::config::Args;
use crate::csv_export::{write_label_map, write_split_csv};
use crate::error::ConvertError;
use crate::io::{parse_split, write_aggregate_files, write_label_files};
use crate::labels::LabelIndex;
use crate::types::{ProcessingStats, SplitSet};
use crate::utils::{create_output_directory, create_progress_bar};

/// Parse every configured split, filling the shared vocabulary.
fn parse_all_splits(args: &Args, stats: &mut ProcessingStats) -> Result<(Vec<SplitSet>, LabelIndex), ConvertError> {
    let input_dir = Path::new(&args.input_dir);
    let vocabulary = DashSet::new();

    let mut splits = Vec::with_capacity(args.splits.len());
    for split_name in &args.splits {
        let split_dir = input_dir.join(split_name);
        info!("Processing XML files in {}", split_dir.display());
        let split = parse_split(&split_dir, split_name, args.on_error, &vocabulary, stats)?;
        info!("Parsed {} files from split {:?}.", split.records.len(), split_name);
        splits.push(split);
    }

    let labels = LabelIndex::from_vocabulary(vocabulary)?;
    info!("Found {} unique classes.", labels.len());
    Ok((splits, labels))
}

/// VOC to YOLO pipeline: label files per image, a manifest per split,
/// `classes.names`, and `config.data`.
pub fn process_dataset(args: &Args) -> Result<(), ConvertError> {
    let output_dir = create_output_directory(Path::new(&args.output_dir))?;
    let image_dir = create_output_directory(&args.image_dir())?;

    let mut stats = ProcessingStats::new();
    let (splits, labels) = parse_all_splits(args, &mut stats)?;

    for split in &splits {
        let pb = create_progress_bar(split.records.len() as u64, &split.name);
        stats.label_files_written += write_label_files(split, &labels, &image_dir, &pb);
        pb.finish_with_message(format!("{} label files written", split.name));
    }

    let outputs = write_aggregate_files(&splits, &labels, &image_dir, &output_dir)?;
    for manifest in &outputs.manifests {
        info!("Wrote {}", manifest.display());
    }
    info!("Wrote {}", outputs.names_file.display());
    info!("Wrote {}", outputs.config_file.display());
    stats.print_summary();
    Ok(())
}

/// VOC to CSV pipeline: one CSV per split plus `label_map.pbtxt`.
pub fn process_csv_dataset(args: &Args) -> Result<(), ConvertError> {
    let output_dir = create_output_directory(Path::new(&args.output_dir))?;

    let mut stats = ProcessingStats::new();
    let (splits, labels) = parse_all_splits(args, &mut stats)?;

    for split in &splits {
        let csv_path = write_split_csv(split, &output_dir)?;
        info!("Wrote {}", csv_path.display());
    }

    let pbtxt_path = write_label_map(&labels, &output_dir)?;
    info!("Wrote {}", pbtxt_path.display());
    stats.print_summary();
    Ok(())
}

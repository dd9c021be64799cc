//! Directory scanning and dataset emission
//!
//! The scan side enumerates and parses one split directory of VOC XML files;
//! the emit side writes the per-image label files and the aggregate
//! manifest, names, and config files of the Darknet training layout. All
//! output files are whole-file overwrites.

use dashmap::DashSet;
use glob::glob;
use indicatif::ProgressBar;
use log::{error, warn};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::ErrorPolicy;
use crate::conversion::yolo_lines;
use crate::error::ConvertError;
use crate::labels::LabelIndex;
use crate::types::{AnnotationRecord, OutputFiles, ProcessingStats, SplitSet};
use crate::utils::{create_progress_bar, label_file_stem};
use crate::voc::parse_voc_file;

/// Enumerate the XML files of one split directory in sorted path order.
///
/// Sorting makes the record order, and with it every emitted file,
/// independent of directory-listing order.
pub fn scan_split_dir(split_dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    if !split_dir.is_dir() {
        return Err(ConvertError::MissingSplitDir {
            path: split_dir.to_path_buf(),
        });
    }

    let pattern = format!("{}/*.xml", split_dir.display());
    let mut paths: Vec<PathBuf> = glob(&pattern)
        .expect("XML glob pattern is valid")
        .filter_map(|entry| entry.ok())
        .collect();
    paths.sort();
    Ok(paths)
}

/// Parse every annotation file of one split.
///
/// Files are parsed in parallel but the result keeps sorted path order.
/// Class names are accumulated into the shared vocabulary as a side effect
/// of the parse, so the label index can be built once all splits are in.
/// Duplicate `filename` keys keep the first occurrence; later ones are
/// dropped with a warning.
pub fn parse_split(
    split_dir: &Path,
    split_name: &str,
    policy: ErrorPolicy,
    vocabulary: &DashSet<String>,
    stats: &mut ProcessingStats,
) -> Result<SplitSet, ConvertError> {
    let paths = scan_split_dir(split_dir)?;
    let pb = create_progress_bar(paths.len() as u64, split_name);

    let results: Vec<(PathBuf, Result<AnnotationRecord, ConvertError>)> = paths
        .into_par_iter()
        .map(|path| {
            let result = parse_voc_file(&path);
            if let Ok(record) = &result {
                for object in &record.objects {
                    vocabulary.insert(object.name.clone());
                }
            }
            pb.inc(1);
            (path, result)
        })
        .collect();

    let mut seen_filenames = HashSet::new();
    let mut records = Vec::with_capacity(results.len());
    for (path, result) in results {
        stats.increment_total();
        match result {
            Ok(record) => {
                if seen_filenames.insert(record.filename.clone()) {
                    stats.increment_parsed();
                    records.push(record);
                } else {
                    warn!(
                        "Duplicate filename {:?} in {}; keeping the first occurrence",
                        record.filename,
                        path.display()
                    );
                    stats.increment_skipped_duplicate();
                }
            }
            Err(e) => match policy {
                ErrorPolicy::Abort => return Err(e),
                ErrorPolicy::Skip => {
                    warn!("Skipping {}: {}", path.display(), e);
                    stats.increment_skipped_malformed();
                }
            },
        }
    }

    pb.finish_with_message(format!("{} parsing complete", split_name));
    Ok(SplitSet {
        name: split_name.to_string(),
        records,
    })
}

/// Write one YOLO label file per image of a split into the image directory.
/// Returns how many files were written.
pub fn write_label_files(
    split: &SplitSet,
    labels: &LabelIndex,
    image_dir: &Path,
    pb: &ProgressBar,
) -> usize {
    split
        .records
        .par_iter()
        .map(|record| {
            let result = write_label_file(record, labels, image_dir);
            if let Err(e) = &result {
                error!("Failed to write label file for {:?}: {}", record.filename, e);
            }
            pb.inc(1);
            result.is_ok()
        })
        .filter(|ok| *ok)
        .count()
}

fn write_label_file(
    record: &AnnotationRecord,
    labels: &LabelIndex,
    image_dir: &Path,
) -> std::io::Result<()> {
    let output_path = image_dir
        .join(label_file_stem(&record.filename))
        .with_extension("txt");
    let mut writer = BufWriter::new(File::create(&output_path)?);
    writer.write_all(yolo_lines(record, labels).as_bytes())?;
    writer.flush()
}

/// Write the `<split>.txt` manifest: one image path per line, in record
/// order.
pub fn write_split_manifest(
    split: &SplitSet,
    image_dir: &Path,
    output_dir: &Path,
) -> std::io::Result<PathBuf> {
    let manifest_path = output_dir.join(&split.name).with_extension("txt");
    let mut writer = BufWriter::new(File::create(&manifest_path)?);
    for record in &split.records {
        writeln!(writer, "{}", image_dir.join(&record.filename).display())?;
    }
    writer.flush()?;
    Ok(manifest_path)
}

/// Write `classes.names`: one class per line, line number = class id.
pub fn write_names_file(labels: &LabelIndex, output_dir: &Path) -> std::io::Result<PathBuf> {
    let names_path = output_dir.join("classes.names");
    let mut writer = BufWriter::new(File::create(&names_path)?);
    for name in labels.names() {
        writeln!(writer, "{}", name)?;
    }
    writer.flush()?;
    Ok(names_path)
}

/// Write `config.data`, the key-value file Darknet training reads.
///
/// `train` points at the first split manifest and `valid` at the last; with
/// a single split both keys point at the same file.
pub fn write_config_data(
    labels: &LabelIndex,
    manifests: &[PathBuf],
    names_file: &Path,
    output_dir: &Path,
) -> std::io::Result<PathBuf> {
    let config_path = output_dir.join("config.data");
    let mut writer = BufWriter::new(File::create(&config_path)?);

    let (train, valid) = match (manifests.first(), manifests.last()) {
        (Some(train), Some(valid)) => (train, valid),
        _ => {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "no split manifests to reference from config.data",
            ))
        }
    };
    writeln!(writer, "classes={}", labels.len())?;
    writeln!(writer, "train = {}", train.display())?;
    writeln!(writer, "valid = {}", valid.display())?;
    writeln!(writer, "names = {}", names_file.display())?;
    writeln!(writer, "backup = backup/")?;
    writer.flush()?;
    Ok(config_path)
}

/// Write every aggregate file of the YOLO layout for the given splits.
pub fn write_aggregate_files(
    splits: &[SplitSet],
    labels: &LabelIndex,
    image_dir: &Path,
    output_dir: &Path,
) -> std::io::Result<OutputFiles> {
    let mut manifests = Vec::with_capacity(splits.len());
    for split in splits {
        manifests.push(write_split_manifest(split, image_dir, output_dir)?);
    }
    let names_file = write_names_file(labels, output_dir)?;
    let config_file = write_config_data(labels, &manifests, &names_file, output_dir)?;
    Ok(OutputFiles {
        manifests,
        names_file,
        config_file,
    })
}

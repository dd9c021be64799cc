//! CSV and TensorFlow label-map emission
//!
//! The CSV layout matches the TensorFlow Object Detection API convention:
//! one row per object with the image filename, dimensions, class name, and
//! integer pixel corners. The label map uses 1-based ids, since id 0 is
//! reserved for the background class in that ecosystem.

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::labels::LabelIndex;
use crate::types::SplitSet;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    filename: &'a str,
    width: u32,
    height: u32,
    #[serde(rename = "class")]
    class_name: &'a str,
    xmin: i64,
    ymin: i64,
    xmax: i64,
    ymax: i64,
}

/// Write `<split>.csv` with one row per annotated object, in record order.
pub fn write_split_csv(split: &SplitSet, output_dir: &Path) -> Result<PathBuf, ConvertError> {
    let csv_path = output_dir.join(&split.name).with_extension("csv");
    let mut writer = csv::Writer::from_path(&csv_path)?;

    for record in &split.records {
        for object in &record.objects {
            writer.serialize(CsvRow {
                filename: &record.filename,
                width: record.image_width,
                height: record.image_height,
                class_name: &object.name,
                xmin: object.xmin as i64,
                ymin: object.ymin as i64,
                xmax: object.xmax as i64,
                ymax: object.ymax as i64,
            })?;
        }
    }
    writer.flush()?;
    Ok(csv_path)
}

/// Render the label-map content: one `item` block per class, ids starting
/// at 1 in class-id order.
pub fn label_map_content(labels: &LabelIndex) -> String {
    let mut content = String::new();
    for (id, name) in labels.names().iter().enumerate() {
        content.push_str(&format!(
            "item {{\n    id: {}\n    name: '{}'\n}}\n\n",
            id + 1,
            name
        ));
    }
    content
}

/// Write `label_map.pbtxt` into the output directory.
pub fn write_label_map(labels: &LabelIndex, output_dir: &Path) -> std::io::Result<PathBuf> {
    let pbtxt_path = output_dir.join("label_map.pbtxt");
    let mut writer = BufWriter::new(File::create(&pbtxt_path)?);
    writer.write_all(label_map_content(labels).as_bytes())?;
    writer.flush()?;
    Ok(pbtxt_path)
}

//! PASCAL VOC to YOLO format converter
//!
//! This library converts directories of PASCAL VOC XML annotations into the
//! Darknet/YOLO training layout (per-image label files, split manifests,
//! `classes.names`, `config.data`) or into per-split CSV files with a
//! TensorFlow label map. It also ships a small rewriter for Darknet `.cfg`
//! files that keeps `classes=` and `filters=` lines in sync with a `.names`
//! file.

pub mod config;
pub mod conversion;
pub mod csv_export;
pub mod darknet_cfg;
pub mod dataset;
pub mod error;
pub mod io;
pub mod labels;
pub mod types;
pub mod utils;
pub mod voc;

// Re-export commonly used types and functions
pub use config::{Args, ErrorPolicy, UpdateCfgArgs};
pub use dataset::{process_csv_dataset, process_dataset};
pub use error::ConvertError;
pub use labels::LabelIndex;
pub use types::{AnnotationRecord, ProcessingStats, SplitSet, VocObject, YoloBox};

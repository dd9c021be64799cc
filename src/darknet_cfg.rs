//! Darknet config rewriting
//!
//! A YOLOv3 `.cfg` hardcodes the class count in each `[yolo]` section and
//! the filter count of the convolutional layer feeding it. When the class
//! list changes, both must be updated: `classes=<N>` and, for each
//! `activation=linear` layer, the nearest preceding `filters=` line set to
//! `(classes + 5) * 3`.

use std::fs;
use std::path::Path;

use crate::error::ConvertError;

/// Filter count of the convolutional layer in front of a `[yolo]` section:
/// three anchors, each predicting 4 box coordinates + objectness + classes.
pub fn yolo_filter_size(classes: usize) -> usize {
    (classes + 5) * 3
}

/// Number of classes in a `.names` file: one class per non-empty line.
pub fn count_classes(names_path: &Path) -> Result<usize, ConvertError> {
    let content = fs::read_to_string(names_path)?;
    Ok(content.lines().filter(|line| !line.trim().is_empty()).count())
}

/// Rewrite `classes=` and the relevant `filters=` lines of a config so they
/// match `classes` distinct classes. Returns the rewritten content.
pub fn rewrite_config(content: &str, classes: usize) -> String {
    let filters = yolo_filter_size(classes);
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();

    // The filters= line is usually directly above activation=linear, but
    // comments or blank lines may sit in between, so search backwards for it.
    let mut filter_lines = Vec::new();
    let mut classes_lines = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if line.contains("linear") {
            if let Some(filter_index) = (0..index)
                .rev()
                .find(|&i| lines[i].trim_start().starts_with("filters"))
            {
                filter_lines.push(filter_index);
            }
        }
        if line.contains("classes") {
            classes_lines.push(index);
        }
    }

    for index in filter_lines {
        lines[index] = format!("filters={}", filters);
    }
    for index in classes_lines {
        lines[index] = format!("classes={}", classes);
    }

    let mut rewritten = lines.join("\n");
    rewritten.push('\n');
    rewritten
}

/// Rewrite a config file in place to match the class count of a `.names`
/// file.
pub fn update_config_file(cfg_path: &Path, names_path: &Path) -> Result<usize, ConvertError> {
    let classes = count_classes(names_path)?;
    let content = fs::read_to_string(cfg_path)?;
    fs::write(cfg_path, rewrite_config(&content, classes))?;
    Ok(classes)
}

//! PASCAL VOC XML parsing
//!
//! Deserializes one annotation document per image into raw option-typed
//! structs, then validates them into [`AnnotationRecord`]s. Validation is
//! explicit so that a missing element, a non-numeric value, and an
//! out-of-bounds box each surface as their own error kind rather than a
//! generic deserialization failure.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConvertError;
use crate::types::{AnnotationRecord, VocObject};

// Raw document shape. Every leaf is optional text so validation can report
// which element was missing or malformed.
#[derive(Debug, Deserialize)]
struct RawAnnotation {
    filename: Option<String>,
    size: Option<RawSize>,
    #[serde(default, rename = "object")]
    objects: Vec<RawObject>,
}

#[derive(Debug, Deserialize)]
struct RawSize {
    width: Option<String>,
    height: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawObject {
    name: Option<String>,
    bndbox: Option<RawBndBox>,
}

#[derive(Debug, Deserialize)]
struct RawBndBox {
    xmin: Option<String>,
    ymin: Option<String>,
    xmax: Option<String>,
    ymax: Option<String>,
}

/// Parse and validate a single VOC XML file.
pub fn parse_voc_file(path: &Path) -> Result<AnnotationRecord, ConvertError> {
    let content = fs::read_to_string(path)?;
    let raw: RawAnnotation =
        quick_xml::de::from_str(&content).map_err(|source| ConvertError::Xml {
            path: path.to_path_buf(),
            source,
        })?;

    let filename = require(raw.filename, "filename", path)?;
    let size = require(raw.size, "size", path)?;
    let image_width = parse_dimension(size.width, "width", path)?;
    let image_height = parse_dimension(size.height, "height", path)?;

    let mut objects = Vec::with_capacity(raw.objects.len());
    for object in raw.objects {
        let name = require(object.name, "name", path)?;
        let bndbox = require(object.bndbox, "bndbox", path)?;
        let xmin = parse_coordinate(bndbox.xmin, "xmin", path)?;
        let ymin = parse_coordinate(bndbox.ymin, "ymin", path)?;
        let xmax = parse_coordinate(bndbox.xmax, "xmax", path)?;
        let ymax = parse_coordinate(bndbox.ymax, "ymax", path)?;

        let in_bounds = 0.0 <= xmin
            && xmin < xmax
            && xmax <= image_width as f64
            && 0.0 <= ymin
            && ymin < ymax
            && ymax <= image_height as f64;
        if !in_bounds {
            return Err(ConvertError::BoxOutOfBounds {
                path: path.to_path_buf(),
                xmin,
                ymin,
                xmax,
                ymax,
                width: image_width,
                height: image_height,
            });
        }

        objects.push(VocObject {
            name,
            xmin,
            ymin,
            xmax,
            ymax,
        });
    }

    Ok(AnnotationRecord {
        filename,
        image_width,
        image_height,
        objects,
    })
}

fn require<T>(value: Option<T>, element: &'static str, path: &Path) -> Result<T, ConvertError> {
    value.ok_or_else(|| ConvertError::MissingField {
        element,
        path: path.to_path_buf(),
    })
}

// Image dimensions must be positive integers.
fn parse_dimension(
    value: Option<String>,
    element: &'static str,
    path: &Path,
) -> Result<u32, ConvertError> {
    let text = require(value, element, path)?;
    match text.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConvertError::InvalidNumber {
            element,
            path: path.to_path_buf(),
            value: text,
        }),
    }
}

// Corner coordinates are floats in some VOC exports, so parse as f64.
fn parse_coordinate(
    value: Option<String>,
    element: &'static str,
    path: &Path,
) -> Result<f64, ConvertError> {
    let text = require(value, element, path)?;
    match text.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ConvertError::InvalidNumber {
            element,
            path: path.to_path_buf(),
            value: text,
        }),
    }
}

use std::path::PathBuf;

/// Error kinds for the conversion pipeline.
///
/// The input corpus is untrusted, user-supplied annotation data, so every
/// malformed-input case gets its own variant instead of surfacing as a raw
/// deserialization error.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// A required XML element is absent.
    #[error("missing element <{element}> in {}", path.display())]
    MissingField {
        element: &'static str,
        path: PathBuf,
    },

    /// An element's text could not be parsed as a number, or a dimension
    /// was not a positive integer.
    #[error("invalid number {value:?} in <{element}> of {}", path.display())]
    InvalidNumber {
        element: &'static str,
        path: PathBuf,
        value: String,
    },

    /// A bounding box lies outside the image or has inverted corners.
    #[error(
        "bounding box ({xmin}, {ymin}, {xmax}, {ymax}) out of bounds for {width}x{height} image in {}",
        path.display()
    )]
    BoxOutOfBounds {
        path: PathBuf,
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
        width: u32,
        height: u32,
    },

    /// The document is not well-formed XML or does not match the VOC schema.
    #[error("malformed XML in {}: {source}", path.display())]
    Xml {
        path: PathBuf,
        source: quick_xml::DeError,
    },

    /// No class labels were found in any input file, so no ids can be
    /// assigned.
    #[error("no class labels found in any input file")]
    EmptyClassSet,

    /// A configured split directory does not exist.
    #[error("split directory does not exist: {}", path.display())]
    MissingSplitDir { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

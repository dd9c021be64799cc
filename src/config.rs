use clap::{Parser, ValueEnum};

/// Command-line arguments for converting VOC XML annotations to YOLO or CSV
/// datasets.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct Args {
    /// Directory containing the dataset split subdirectories of VOC XML files
    #[arg(short = 'i', long = "input_dir")]
    pub input_dir: String,

    /// Directory for the aggregate output files (manifests, classes.names,
    /// config.data, CSV files)
    #[arg(short = 'o', long = "output_dir", default_value = ".")]
    pub output_dir: String,

    /// Directory holding the images; per-image label files are written here
    /// and manifest lines point into it. Defaults to <output_dir>/images
    #[arg(long = "image_dir")]
    pub image_dir: Option<String>,

    /// Names of the split subdirectories under the input directory
    #[arg(
        long = "splits",
        use_value_delimiter = true,
        default_value = "train_labels,test_labels"
    )]
    pub splits: Vec<String>,

    /// What to do when an annotation file cannot be parsed
    #[arg(long = "on-error", value_enum, default_value = "skip")]
    pub on_error: ErrorPolicy,
}

// Policy applied to malformed annotation files
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum ErrorPolicy {
    /// Skip the file, log a warning, and keep going
    Skip,
    /// Abort the whole run on the first malformed file
    Abort,
}

impl Args {
    /// Resolved image directory, falling back to `<output_dir>/images`.
    pub fn image_dir(&self) -> std::path::PathBuf {
        match &self.image_dir {
            Some(dir) => std::path::PathBuf::from(dir),
            None => std::path::Path::new(&self.output_dir).join("images"),
        }
    }
}

/// Command-line arguments for rewriting a Darknet config file to match a
/// class list.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct UpdateCfgArgs {
    /// Path to the Darknet .cfg file to rewrite in place
    #[arg(short = 'i', long = "input")]
    pub input: String,

    /// Path to the .names file containing one class per line
    #[arg(short = 'n', long = "names_file")]
    pub names_file: String,
}

use std::path::PathBuf;

// A single annotated object as read from a VOC XML file, corners in pixel
// space with (xmin, ymin) the upper-left and (xmax, ymax) the lower-right.
#[derive(Debug, Clone, PartialEq)]
pub struct VocObject {
    pub name: String,
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

// The parsed annotation for one image: filename, dimensions, and every
// object the XML declared, in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationRecord {
    pub filename: String,
    pub image_width: u32,
    pub image_height: u32,
    pub objects: Vec<VocObject>,
}

// One object in Darknet/YOLO form: class id plus center/size normalized to
// [0, 1] by the image dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YoloBox {
    pub class_id: usize,
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

// All records parsed from one dataset split directory, e.g. "train_labels".
#[derive(Debug, Clone)]
pub struct SplitSet {
    pub name: String,
    pub records: Vec<AnnotationRecord>,
}

// Paths of the aggregate files written for the YOLO layout. The manifest
// list is in split order; config.data points at the first and last entries.
pub struct OutputFiles {
    pub manifests: Vec<PathBuf>,
    pub names_file: PathBuf,
    pub config_file: PathBuf,
}

// Struct to hold processing statistics
#[derive(Debug, Default, Clone)]
pub struct ProcessingStats {
    pub total_files: usize,
    pub parsed_files: usize,
    pub skipped_malformed: usize,
    pub skipped_duplicate: usize,
    pub label_files_written: usize,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_total(&mut self) {
        self.total_files += 1;
    }

    pub fn increment_parsed(&mut self) {
        self.parsed_files += 1;
    }

    pub fn increment_skipped_malformed(&mut self) {
        self.skipped_malformed += 1;
    }

    pub fn increment_skipped_duplicate(&mut self) {
        self.skipped_duplicate += 1;
    }

    pub fn print_summary(&self) {
        log::info!("=== Processing Summary ===");
        log::info!("Total XML files found: {}", self.total_files);
        log::info!("Successfully parsed: {}", self.parsed_files);
        log::info!("Label files written: {}", self.label_files_written);

        let total_skipped = self.skipped_malformed + self.skipped_duplicate;
        if total_skipped > 0 {
            log::warn!(
                "Total skipped files: {} (malformed: {}, duplicate filename: {})",
                total_skipped,
                self.skipped_malformed,
                self.skipped_duplicate
            );
        }
    }
}

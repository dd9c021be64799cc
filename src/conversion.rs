//! VOC corner boxes to Darknet/YOLO center boxes

use crate::labels::LabelIndex;
use crate::types::{AnnotationRecord, VocObject, YoloBox};

/// Convert one corner-based box to normalized center/width/height form.
///
/// The parser guarantees `0 <= xmin < xmax <= width` (and likewise for y),
/// so every component of the result lies in [0, 1].
pub fn to_darknet(image_width: u32, image_height: u32, object: &VocObject) -> (f64, f64, f64, f64) {
    let scale_x = 1.0 / image_width as f64;
    let scale_y = 1.0 / image_height as f64;

    let x_center = scale_x * (object.xmin + object.xmax) / 2.0;
    let y_center = scale_y * (object.ymin + object.ymax) / 2.0;
    let width = scale_x * (object.xmax - object.xmin);
    let height = scale_y * (object.ymax - object.ymin);

    debug_assert!((0.0..=1.0).contains(&x_center) && (0.0..=1.0).contains(&y_center));
    debug_assert!((0.0..=1.0).contains(&width) && (0.0..=1.0).contains(&height));

    (x_center, y_center, width, height)
}

/// Convert every object of a record, resolving class ids through the label
/// index. The index is built from the full corpus before any conversion, so
/// the lookup cannot miss.
pub fn convert_record(record: &AnnotationRecord, labels: &LabelIndex) -> Vec<YoloBox> {
    record
        .objects
        .iter()
        .filter_map(|object| {
            let class_id = labels.id(&object.name)?;
            let (x_center, y_center, width, height) =
                to_darknet(record.image_width, record.image_height, object);
            Some(YoloBox {
                class_id,
                x_center,
                y_center,
                width,
                height,
            })
        })
        .collect()
}

/// Render a record as the content of its YOLO label file, one
/// `class_id x_center y_center width height` line per object.
pub fn yolo_lines(record: &AnnotationRecord, labels: &LabelIndex) -> String {
    let mut data = String::with_capacity(record.objects.len() * 64);
    for b in convert_record(record, labels) {
        data.push_str(&format!(
            "{} {:.6} {:.6} {:.6} {:.6}\n",
            b.class_id, b.x_center, b.y_center, b.width, b.height
        ));
    }
    data
}

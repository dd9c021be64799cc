use voc2yolo::conversion::{to_darknet, yolo_lines};
use voc2yolo::csv_export::label_map_content;
use voc2yolo::darknet_cfg::{count_classes, rewrite_config, yolo_filter_size};
use voc2yolo::labels::LabelIndex;
use voc2yolo::types::{AnnotationRecord, VocObject};
use voc2yolo::ConvertError;

fn record(filename: &str, width: u32, height: u32, objects: &[(&str, f64, f64, f64, f64)]) -> AnnotationRecord {
    AnnotationRecord {
        filename: filename.to_string(),
        image_width: width,
        image_height: height,
        objects: objects
            .iter()
            .map(|&(name, xmin, ymin, xmax, ymax)| VocObject {
                name: name.to_string(),
                xmin,
                ymin,
                xmax,
                ymax,
            })
            .collect(),
    }
}

#[test]
fn test_to_darknet_reference_example() {
    let object = VocObject {
        name: "cat".to_string(),
        xmin: 10.0,
        ymin: 10.0,
        xmax: 50.0,
        ymax: 50.0,
    };

    let (x_center, y_center, width, height) = to_darknet(100, 100, &object);

    assert!((x_center - 0.30).abs() < 1e-12);
    assert!((y_center - 0.30).abs() < 1e-12);
    assert!((width - 0.40).abs() < 1e-12);
    assert!((height - 0.40).abs() < 1e-12);
}

#[test]
fn test_to_darknet_outputs_normalized() {
    let boxes = [
        (0.0, 0.0, 640.0, 480.0),
        (0.0, 0.0, 1.0, 1.0),
        (639.0, 479.0, 640.0, 480.0),
        (13.5, 271.25, 301.0, 480.0),
    ];
    for (xmin, ymin, xmax, ymax) in boxes {
        let object = VocObject {
            name: "x".to_string(),
            xmin,
            ymin,
            xmax,
            ymax,
        };
        let (x, y, w, h) = to_darknet(640, 480, &object);
        for value in [x, y, w, h] {
            assert!((0.0..=1.0).contains(&value), "{} out of range", value);
        }
    }
}

#[test]
fn test_to_darknet_round_trip() {
    let object = VocObject {
        name: "x".to_string(),
        xmin: 37.0,
        ymin: 113.5,
        xmax: 591.25,
        ymax: 442.0,
    };
    let (x, y, w, h) = to_darknet(640, 480, &object);

    let xmin = (x - w / 2.0) * 640.0;
    let xmax = (x + w / 2.0) * 640.0;
    let ymin = (y - h / 2.0) * 480.0;
    let ymax = (y + h / 2.0) * 480.0;

    assert!((xmin - object.xmin).abs() < 1e-9);
    assert!((xmax - object.xmax).abs() < 1e-9);
    assert!((ymin - object.ymin).abs() < 1e-9);
    assert!((ymax - object.ymax).abs() < 1e-9);
}

#[test]
fn test_label_index_sorted_and_contiguous() {
    let labels = LabelIndex::from_names(
        ["cat", "dog", "dog", "bird"].iter().map(|s| s.to_string()),
    )
    .unwrap();

    assert_eq!(labels.names(), &["bird", "cat", "dog"]);
    assert_eq!(labels.id("bird"), Some(0));
    assert_eq!(labels.id("cat"), Some(1));
    assert_eq!(labels.id("dog"), Some(2));
    assert_eq!(labels.id("horse"), None);
    assert_eq!(labels.len(), 3);
}

#[test]
fn test_label_index_empty_is_error() {
    let result = LabelIndex::from_names(std::iter::empty());
    assert!(matches!(result, Err(ConvertError::EmptyClassSet)));
}

#[test]
fn test_yolo_lines_format() {
    let record = record("img.jpg", 100, 100, &[("cat", 10.0, 10.0, 50.0, 50.0)]);
    let labels = LabelIndex::from_names(["cat".to_string()]).unwrap();

    assert_eq!(
        yolo_lines(&record, &labels),
        "0 0.300000 0.300000 0.400000 0.400000\n"
    );
}

#[test]
fn test_yolo_lines_one_line_per_object() {
    let record = record(
        "img.jpg",
        200,
        100,
        &[("dog", 0.0, 0.0, 100.0, 50.0), ("cat", 50.0, 25.0, 150.0, 75.0)],
    );
    let labels =
        LabelIndex::from_names(["dog".to_string(), "cat".to_string()]).unwrap();

    let output = yolo_lines(&record, &labels);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("1 "), "dog sorts after cat: {}", lines[0]);
    assert!(lines[1].starts_with("0 "));
}

#[test]
fn test_label_map_content() {
    let labels =
        LabelIndex::from_names(["dog".to_string(), "cat".to_string()]).unwrap();
    let content = label_map_content(&labels);

    assert_eq!(
        content,
        "item {\n    id: 1\n    name: 'cat'\n}\n\nitem {\n    id: 2\n    name: 'dog'\n}\n\n"
    );
}

#[test]
fn test_yolo_filter_size() {
    assert_eq!(yolo_filter_size(1), 18);
    assert_eq!(yolo_filter_size(80), 255);
}

#[test]
fn test_count_classes() {
    let dir = tempfile::tempdir().unwrap();
    let names_path = dir.path().join("classes.names");
    std::fs::write(&names_path, "bird\ncat\ndog\n").unwrap();

    assert_eq!(count_classes(&names_path).unwrap(), 3);
}

#[test]
fn test_rewrite_config_updates_classes_and_filters() {
    let cfg = "\
[convolutional]
size=1
filters=255
activation=linear

[yolo]
classes=80
num=9
";
    let rewritten = rewrite_config(cfg, 2);

    assert!(rewritten.contains("filters=21"), "{}", rewritten);
    assert!(rewritten.contains("classes=2"), "{}", rewritten);
    assert!(!rewritten.contains("filters=255"));
    assert!(!rewritten.contains("classes=80"));
}

#[test]
fn test_rewrite_config_finds_filters_past_blank_lines() {
    let cfg = "\
filters=255
# prediction layer

activation=linear
";
    let rewritten = rewrite_config(cfg, 5);
    assert!(rewritten.contains("filters=30"), "{}", rewritten);
}

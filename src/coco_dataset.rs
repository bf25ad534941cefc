//! YOLO to COCO dataset conversion
//!
//! Collects a directory of YOLO label files and their images into a single
//! COCO JSON document.

use log::{debug, info};
use std::path::Path;

use crate::coco::{CocoFile, CocoWriter};
use crate::error::ConvertError;
use crate::io::{list_label_files, read_yolo_labels, write_coco_file};
use crate::types::ConversionStats;
use crate::utils::{create_progress_bar, read_image_dimensions};

/// Where to find the YOLO inputs and how to label them
#[derive(Debug, Clone)]
pub struct YoloSource<'a> {
    pub labels_dir: &'a Path,
    pub images_dir: &'a Path,
    pub image_ext: &'a str,
    pub categories: &'a [String],
}

/// Convert YOLO labels and write the COCO document to `output_json`
pub fn yolo_to_coco(
    source: &YoloSource,
    output_json: &Path,
) -> Result<ConversionStats, ConvertError> {
    let (coco, stats) = build_coco_file(source)?;
    write_coco_file(output_json, &coco)?;
    info!("Wrote {}", output_json.display());
    Ok(stats)
}

/// Build the COCO document in memory.
///
/// Label files are visited in sorted order; each file's position in that
/// order becomes its image id.
pub fn build_coco_file(source: &YoloSource) -> Result<(CocoFile, ConversionStats), ConvertError> {
    let mut writer = CocoWriter::new();
    writer.add_categories(source.categories);

    let label_files = list_label_files(source.labels_dir)?;
    info!(
        "Found {} label files in {}",
        label_files.len(),
        source.labels_dir.display()
    );

    let mut stats = ConversionStats::new();
    let pb = create_progress_bar(label_files.len() as u64, "Labels");
    for label_path in &label_files {
        let image_file = image_file_name(label_path, source.image_ext);
        let image_path = source.images_dir.join(&image_file);
        let (width, height) = read_image_dimensions(&image_path)?;

        let labels = read_yolo_labels(label_path)?;
        let image_id = writer.add_image(image_file, width, height);
        debug!(
            "Image {} ({}x{}) has {} labels",
            image_id,
            width,
            height,
            labels.len()
        );

        for label in labels {
            writer.add_annotation(image_id, label.class_id, label.bbox.to_coco(width, height));
            stats.increment_labels_converted();
        }
        stats.increment_files_read();
        stats.increment_images_written();
        pb.inc(1);
    }
    pb.finish_with_message("Labels complete");

    Ok((writer.build(), stats))
}

fn image_file_name(label_path: &Path, image_ext: &str) -> String {
    let stem = label_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}.{}", stem, image_ext.trim_start_matches('.'))
}

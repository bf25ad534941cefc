use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::coco::{Annotation, CocoFile, Image};
use crate::error::ConvertError;
use crate::io::{append_label_line, read_coco_file};
use crate::types::{ConversionStats, YoloLabel};
use crate::utils::{
    check_image_dimensions, create_progress_bar, ensure_output_directory, label_file_name,
};

/// Convert a COCO JSON file into one YOLO label file per annotated image
pub fn coco_to_yolo(coco_path: &Path, output_dir: &Path) -> Result<ConversionStats, ConvertError> {
    let coco = read_coco_file(coco_path)?;
    info!(
        "Read {} images and {} annotations from {}",
        coco.images.len(),
        coco.annotations.len(),
        coco_path.display()
    );

    let mut stats = convert_annotations(&coco, output_dir)?;
    stats.increment_files_read();
    Ok(stats)
}

/// Write YOLO lines for every annotation of an already parsed COCO file.
///
/// Lines are appended, so running twice into the same directory doubles the
/// content of each label file.
pub fn convert_annotations(
    coco: &CocoFile,
    output_dir: &Path,
) -> Result<ConversionStats, ConvertError> {
    ensure_output_directory(output_dir)?;

    let image_map: HashMap<u64, &Image> = coco.images.iter().map(|img| (img.id, img)).collect();
    let mut stats = ConversionStats::new();
    let mut written = HashSet::new();

    let pb = create_progress_bar(coco.annotations.len() as u64, "Annotations");
    for annotation in &coco.annotations {
        let image = image_map
            .get(&annotation.image_id)
            .ok_or(ConvertError::UnknownImage {
                image_id: annotation.image_id,
            })?;

        let label = convert_annotation(annotation, image)?;
        let label_path = output_dir.join(label_file_name(&image.file_name)?);
        append_label_line(&label_path, &label.to_line())?;

        if written.insert(image.id) {
            debug!("Writing labels to {}", label_path.display());
            stats.increment_images_written();
        }
        stats.increment_labels_converted();
        pb.inc(1);
    }
    pb.finish_with_message("Annotations complete");

    Ok(stats)
}

/// Normalize one annotation against its image; class ids shift to 0-based
pub fn convert_annotation(annotation: &Annotation, image: &Image) -> Result<YoloLabel, ConvertError> {
    check_image_dimensions(&image.file_name, image.width, image.height)?;
    Ok(YoloLabel {
        class_id: annotation.category_id - 1,
        bbox: annotation.bbox.to_yolo(image.width, image.height),
    })
}

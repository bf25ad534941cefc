use crate::bbox::YoloBox;

/// One object line of a YOLO label file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YoloLabel {
    pub class_id: i64,
    pub bbox: YoloBox,
}

impl YoloLabel {
    /// Render as `<class_id> <cx> <cy> <w> <h>` with six decimals per float
    pub fn to_line(&self) -> String {
        format!("{} {}", self.class_id, self.bbox.to_label_fields())
    }
}

// Struct to hold processing statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConversionStats {
    pub files_read: usize,
    pub images_written: usize,
    pub labels_converted: usize,
}

impl ConversionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_files_read(&mut self) {
        self.files_read += 1;
    }

    pub fn increment_images_written(&mut self) {
        self.images_written += 1;
    }

    pub fn increment_labels_converted(&mut self) {
        self.labels_converted += 1;
    }

    pub fn print_summary(&self) {
        log::info!("=== Conversion Summary ===");
        log::info!("Files read: {}", self.files_read);
        log::info!("Images written: {}", self.images_written);
        log::info!("Labels converted: {}", self.labels_converted);
    }
}

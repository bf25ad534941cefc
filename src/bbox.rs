//! Bounding-box representations and the arithmetic between them.
//!
//! COCO boxes are `[x_min, y_min, width, height]` in absolute pixels with the
//! origin at the top-left corner. YOLO boxes are `(center_x, center_y, width,
//! height)` normalized to `[0, 1]` by the image size.

use serde::{Deserialize, Serialize};

/// A COCO bounding box in absolute pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct CocoBox {
    pub x_min: f64,
    pub y_min: f64,
    pub width: f64,
    pub height: f64,
}

/// A YOLO bounding box normalized by the image dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YoloBox {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl CocoBox {
    pub fn new(x_min: f64, y_min: f64, width: f64, height: f64) -> Self {
        Self {
            x_min,
            y_min,
            width,
            height,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Normalize against an image of the given size.
    ///
    /// Callers must reject zero-sized images first; this function divides
    /// without checking.
    pub fn to_yolo(&self, image_width: u32, image_height: u32) -> YoloBox {
        let image_width = image_width as f64;
        let image_height = image_height as f64;

        YoloBox {
            center_x: (self.x_min + self.width / 2.0) / image_width,
            center_y: (self.y_min + self.height / 2.0) / image_height,
            width: self.width / image_width,
            height: self.height / image_height,
        }
    }
}

impl From<[f64; 4]> for CocoBox {
    fn from([x_min, y_min, width, height]: [f64; 4]) -> Self {
        Self::new(x_min, y_min, width, height)
    }
}

impl From<CocoBox> for [f64; 4] {
    fn from(bbox: CocoBox) -> Self {
        [bbox.x_min, bbox.y_min, bbox.width, bbox.height]
    }
}

impl YoloBox {
    pub fn new(center_x: f64, center_y: f64, width: f64, height: f64) -> Self {
        Self {
            center_x,
            center_y,
            width,
            height,
        }
    }

    /// Scale back to absolute pixels for an image of the given size.
    pub fn to_coco(&self, image_width: u32, image_height: u32) -> CocoBox {
        let image_width = image_width as f64;
        let image_height = image_height as f64;

        CocoBox {
            x_min: (self.center_x - self.width / 2.0) * image_width,
            y_min: (self.center_y - self.height / 2.0) * image_height,
            width: self.width * image_width,
            height: self.height * image_height,
        }
    }

    /// Whether every coordinate lies within `[0, 1]`.
    pub fn is_normalized(&self) -> bool {
        [self.center_x, self.center_y, self.width, self.height]
            .iter()
            .all(|v| (0.0..=1.0).contains(v))
    }

    /// Format as the four coordinate fields of a YOLO label line.
    pub fn to_label_fields(&self) -> String {
        format!(
            "{:.6} {:.6} {:.6} {:.6}",
            self.center_x, self.center_y, self.width, self.height
        )
    }
}

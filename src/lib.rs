//! COCO / YOLO annotation converters and a video frame extractor
//!
//! This library backs three command-line tools: `coco2yolo`, `yolo2coco` and
//! `video2frames`. Each conversion is a single sequential pass from input
//! files to output files.

pub mod bbox;
pub mod coco;
pub mod coco_dataset;
pub mod config;
pub mod conversion;
pub mod error;
pub mod io;
pub mod types;
pub mod utils;
pub mod video;

// Re-export commonly used types and functions
pub use bbox::{CocoBox, YoloBox};
pub use config::{CocoToYoloArgs, VideoToFramesArgs, YoloToCocoArgs};
pub use conversion::coco_to_yolo;
pub use error::ConvertError;
pub use types::{ConversionStats, YoloLabel};
pub use video::{extract_frames, FrameImage, FrameSource};

// COCO-specific exports
pub use coco::{CocoFile, CocoWriter};
pub use coco_dataset::{yolo_to_coco, YoloSource};

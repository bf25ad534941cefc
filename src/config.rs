use clap::Parser;
use std::path::PathBuf;

/// Convert COCO JSON annotations to YOLO label files.
#[derive(Parser, Debug, Clone)]
#[command(name = "coco2yolo", version, long_about = None)]
pub struct CocoToYoloArgs {
    /// Path to the COCO JSON annotations file
    #[arg(long = "coco")]
    pub coco: PathBuf,

    /// Directory where YOLO label files are written
    #[arg(long = "output")]
    pub output: PathBuf,

    /// Directory containing the images (not read by the conversion)
    #[arg(long = "images")]
    pub images: PathBuf,
}

/// Convert YOLO label files to a single COCO JSON file.
#[derive(Parser, Debug, Clone)]
#[command(name = "yolo2coco", version, long_about = None)]
pub struct YoloToCocoArgs {
    /// Directory containing the YOLO .txt label files
    #[arg(long = "yolo_annotations")]
    pub yolo_annotations: PathBuf,

    /// Directory containing the images matching the label files
    #[arg(long = "images_dir")]
    pub images_dir: PathBuf,

    /// Path of the COCO JSON file to write
    #[arg(long = "output_json")]
    pub output_json: PathBuf,

    /// Comma-separated category names, in class id order
    #[arg(
        long = "categories",
        required = true,
        use_value_delimiter = true,
        value_parser = validate_category
    )]
    pub categories: Vec<String>,

    /// Extension of the image paired with each label file
    #[arg(long = "image_ext", default_value = "jpg")]
    pub image_ext: String,
}

/// Convert a video into a series of PNG images.
#[derive(Parser, Debug, Clone)]
#[command(name = "video2frames", version, long_about = None)]
pub struct VideoToFramesArgs {
    /// Path to the input video file
    pub video_path: PathBuf,

    /// Folder where the frames are saved
    pub output_folder: PathBuf,
}

// Category names are used verbatim, including surrounding spaces
fn validate_category(s: &str) -> Result<String, String> {
    if s.is_empty() {
        Err("category names must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

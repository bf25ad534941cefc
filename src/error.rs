use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the converters.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON ({path}): {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Annotation references unknown image id {image_id}")]
    UnknownImage { image_id: u64 },

    #[error("Image {file_name} has zero size ({width}x{height})")]
    ZeroImageDimension {
        file_name: String,
        width: u32,
        height: u32,
    },

    #[error("Failed to read image dimensions ({path}): {source}")]
    ImageDimensions {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },

    #[error("Image {path} is too large: dimension {value} does not fit in u32")]
    ImageTooLarge { path: PathBuf, value: usize },

    #[error("Cannot derive a label file name from image {file_name:?}")]
    InvalidFileName { file_name: String },

    #[error("Malformed YOLO label {path}:{line}: {message}")]
    MalformedLabel {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Failed to open video: {path}")]
    VideoOpen { path: PathBuf },

    #[error("Failed to write frame: {path}")]
    FrameWrite { path: PathBuf },

    #[cfg(feature = "video")]
    #[error("OpenCV error: {0}")]
    OpenCv(#[from] opencv::Error),
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConvertError::Io {
            path: path.into(),
            source,
        }
    }
}

//! Video to frame extraction
//!
//! Decoding sits behind [`FrameSource`] so the numbering and stop rules do not
//! depend on a particular video backend. The OpenCV backend is compiled with
//! the `video` feature.

use indicatif::ProgressBar;
use log::info;
use std::path::Path;

use crate::error::ConvertError;
use crate::utils::{create_spinner, ensure_output_directory};

#[cfg(feature = "video")]
pub use opencv_backend::OpenCvVideo;

/// A decoded frame that can be stored as PNG
pub trait FrameImage {
    fn save_png(&self, path: &Path) -> Result<(), ConvertError>;
}

/// A sequential stream of decoded frames
pub trait FrameSource {
    type Frame: FrameImage;

    /// The next frame, or `None` once decoding fails or the stream ends
    fn next_frame(&mut self) -> Option<Self::Frame>;

    /// Release the underlying decoder
    fn release(&mut self) {}
}

/// `frame_00000.png`, `frame_00001.png`, ...
pub fn frame_file_name(index: usize) -> String {
    format!("frame_{:05}.png", index)
}

/// Save every frame of `source` into `output_folder` and return the count.
///
/// The source is released whether or not writing succeeded.
pub fn extract_frames<S: FrameSource>(
    source: &mut S,
    output_folder: &Path,
) -> Result<usize, ConvertError> {
    ensure_output_directory(output_folder)?;

    let pb = create_spinner("Frames");
    let result = write_frames(source, output_folder, &pb);
    source.release();
    let frame_count = result?;
    pb.finish_with_message("Frames complete");

    info!(
        "Conversion complete! {} frames saved to {}",
        frame_count,
        output_folder.display()
    );
    Ok(frame_count)
}

fn write_frames<S: FrameSource>(
    source: &mut S,
    output_folder: &Path,
    pb: &ProgressBar,
) -> Result<usize, ConvertError> {
    let mut frame_count = 0;
    while let Some(frame) = source.next_frame() {
        let image_path = output_folder.join(frame_file_name(frame_count));
        frame.save_png(&image_path)?;
        frame_count += 1;
        pb.inc(1);
    }
    Ok(frame_count)
}

#[cfg(feature = "video")]
mod opencv_backend {
    use log::{debug, warn};
    use opencv::{
        core::{Mat, Vector},
        imgcodecs,
        prelude::*,
        videoio,
    };
    use std::path::Path;

    use super::{FrameImage, FrameSource};
    use crate::error::ConvertError;

    /// A video file decoded with OpenCV
    pub struct OpenCvVideo {
        capture: videoio::VideoCapture,
    }

    impl OpenCvVideo {
        pub fn open(path: &Path) -> Result<Self, ConvertError> {
            let video_open = || ConvertError::VideoOpen {
                path: path.to_path_buf(),
            };
            let path_str = path.to_str().ok_or_else(video_open)?;
            let capture = videoio::VideoCapture::from_file(path_str, videoio::CAP_ANY)?;
            if !capture.is_opened()? {
                return Err(video_open());
            }
            Ok(Self { capture })
        }
    }

    impl FrameSource for OpenCvVideo {
        type Frame = Mat;

        fn next_frame(&mut self) -> Option<Mat> {
            let mut frame = Mat::default();
            match self.capture.read(&mut frame) {
                Ok(true) if !frame.empty() => Some(frame),
                Ok(_) => None,
                Err(e) => {
                    debug!("Decoding stopped: {}", e);
                    None
                }
            }
        }

        fn release(&mut self) {
            if let Err(e) = self.capture.release() {
                warn!("Failed to release video capture: {}", e);
            }
        }
    }

    impl FrameImage for Mat {
        fn save_png(&self, path: &Path) -> Result<(), ConvertError> {
            let frame_write = || ConvertError::FrameWrite {
                path: path.to_path_buf(),
            };
            let path_str = path.to_str().ok_or_else(frame_write)?;
            if imgcodecs::imwrite(path_str, self, &Vector::new())? {
                Ok(())
            } else {
                Err(frame_write())
            }
        }
    }
}

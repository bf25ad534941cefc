use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;

/// Create a progress bar with the given length and label
pub fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template(&format!(
            "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
            label
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

/// Create a spinner for work of unknown length
pub fn create_spinner(label: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template(&format!(
            "{{spinner:.green}} [{}] [{{elapsed_precise}}] {{pos}} {{msg}}",
            label
        ))
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb
}

/// Create the directory and its parents if missing; existing content is kept
pub fn ensure_output_directory(path: &Path) -> Result<PathBuf, ConvertError> {
    if !path.exists() {
        log::debug!("Creating directory {}", path.display());
        fs::create_dir_all(path).map_err(|e| ConvertError::io(path, e))?;
    }
    Ok(path.to_path_buf())
}

/// Read the pixel size of an image from its header
pub fn read_image_dimensions(path: &Path) -> Result<(u32, u32), ConvertError> {
    let size = imagesize::size(path).map_err(|source| ConvertError::ImageDimensions {
        path: path.to_path_buf(),
        source,
    })?;

    Ok((
        dimension_to_u32(path, size.width)?,
        dimension_to_u32(path, size.height)?,
    ))
}

fn dimension_to_u32(path: &Path, value: usize) -> Result<u32, ConvertError> {
    u32::try_from(value).map_err(|_| ConvertError::ImageTooLarge {
        path: path.to_path_buf(),
        value,
    })
}

/// Fail on images whose boxes cannot be normalized
pub fn check_image_dimensions(file_name: &str, width: u32, height: u32) -> Result<(), ConvertError> {
    if width == 0 || height == 0 {
        return Err(ConvertError::ZeroImageDimension {
            file_name: file_name.to_string(),
            width,
            height,
        });
    }
    Ok(())
}

/// Label file name for an image: the stem of its base name with a `.txt`
/// extension. Directory components are dropped, the stem is kept verbatim.
pub fn label_file_name(image_file_name: &str) -> Result<String, ConvertError> {
    let invalid = || ConvertError::InvalidFileName {
        file_name: image_file_name.to_string(),
    };
    let stem = Path::new(image_file_name)
        .file_stem()
        .map(|s| s.to_string_lossy())
        .ok_or_else(invalid)?;
    if stem.is_empty() || stem == "." || stem == ".." {
        return Err(invalid());
    }
    Ok(format!("{}.txt", stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_file_name() {
        assert_eq!(label_file_name("a.jpg").unwrap(), "a.txt");
        assert_eq!(label_file_name("train/000123.png").unwrap(), "000123.txt");
        assert_eq!(label_file_name("frame.v2.jpeg").unwrap(), "frame.v2.txt");
        assert_eq!(label_file_name("noext").unwrap(), "noext.txt");
    }

    #[test]
    fn test_label_file_name_keeps_stem_verbatim() {
        assert_eq!(
            label_file_name("cam1_2023-01-01T12:00:00.jpg").unwrap(),
            "cam1_2023-01-01T12:00:00.txt"
        );
        assert_eq!(label_file_name("a?.jpg").unwrap(), "a?.txt");
        assert_ne!(
            label_file_name("a?.jpg").unwrap(),
            label_file_name("a.jpg").unwrap()
        );
    }

    #[test]
    fn test_label_file_name_rejects_empty_stem() {
        for name in ["", ".", "..", "train/.."] {
            assert!(
                matches!(
                    label_file_name(name),
                    Err(ConvertError::InvalidFileName { .. })
                ),
                "{:?}",
                name
            );
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_oversized_dimension_is_an_error() {
        let path = Path::new("huge.png");
        assert_eq!(dimension_to_u32(path, 4096).unwrap(), 4096);
        assert!(matches!(
            dimension_to_u32(path, u32::MAX as usize + 1),
            Err(ConvertError::ImageTooLarge { .. })
        ));
    }

    #[test]
    fn test_check_image_dimensions() {
        assert!(check_image_dimensions("a.jpg", 100, 200).is_ok());
        assert!(matches!(
            check_image_dimensions("a.jpg", 0, 200),
            Err(ConvertError::ZeroImageDimension { width: 0, .. })
        ));
        assert!(check_image_dimensions("a.jpg", 100, 0).is_err());
    }

    #[test]
    fn test_ensure_output_directory_keeps_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a/b");
        ensure_output_directory(&nested).unwrap();
        fs::write(nested.join("keep.txt"), "x").unwrap();

        ensure_output_directory(&nested).unwrap();
        assert!(nested.join("keep.txt").exists());
    }
}

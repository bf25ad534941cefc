use glob::{glob, Pattern};
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::bbox::YoloBox;
use crate::coco::CocoFile;
use crate::error::ConvertError;
use crate::types::YoloLabel;
use crate::utils::ensure_output_directory;

/// Read and parse a COCO JSON file straight from a file stream
pub fn read_coco_file(path: &Path) -> Result<CocoFile, ConvertError> {
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ConvertError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a COCO file with 4-space indentation, creating parent directories
pub fn write_coco_file(path: &Path, coco: &CocoFile) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_output_directory(parent)?;
    }

    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    coco.serialize(&mut serializer)
        .map_err(|source| ConvertError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(|e| ConvertError::io(path, e))
}

/// List the `*.txt` files directly inside `dir`, in sorted path order
pub fn list_label_files(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    if !dir.is_dir() {
        return Err(ConvertError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        ));
    }

    let pattern = format!("{}/*.txt", Pattern::escape(&dir.to_string_lossy()));
    let mut files = Vec::new();
    for entry in glob(&pattern)? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) => log::debug!("Skipping non-file entry {}", path.display()),
            Err(e) => {
                let path = e.path().to_path_buf();
                return Err(ConvertError::io(path, std::io::Error::from(e)));
            }
        }
    }
    Ok(files)
}

/// Read every line of a YOLO label file
pub fn read_yolo_labels(path: &Path) -> Result<Vec<YoloLabel>, ConvertError> {
    let content = fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| parse_label_line(line, path, idx + 1))
        .collect()
}

/// Parse `class_id cx cy w h`; anything but five numbers is an error
pub fn parse_label_line(
    line: &str,
    path: &Path,
    line_num: usize,
) -> Result<YoloLabel, ConvertError> {
    let malformed = |message: String| ConvertError::MalformedLabel {
        path: path.to_path_buf(),
        line: line_num,
        message,
    };

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 5 {
        return Err(malformed(format!(
            "expected 5 fields, found {}",
            tokens.len()
        )));
    }

    let mut values = [0.0f64; 5];
    for (value, token) in values.iter_mut().zip(&tokens) {
        *value = token
            .parse()
            .map_err(|_| malformed(format!("'{}' is not a number", token)))?;
    }

    let [class_id, center_x, center_y, width, height] = values;
    Ok(YoloLabel {
        class_id: class_id as i64,
        bbox: YoloBox::new(center_x, center_y, width, height),
    })
}

/// Append one line to a label file, creating it if missing
pub fn append_label_line(path: &Path, line: &str) -> Result<(), ConvertError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ConvertError::io(path, e))?;
    writeln!(file, "{}", line).map_err(|e| ConvertError::io(path, e))
}

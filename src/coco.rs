//! COCO format data structures
//!
//! The same types are used to read an existing COCO file and to build a new
//! one. Field order is the order keys are written in.

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::bbox::CocoBox;

/// COCO category information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_supercategory")]
    pub supercategory: String,
}

fn default_supercategory() -> String {
    "none".to_string()
}

/// Ids and sizes may be written as `640` or `640.0`
#[derive(Deserialize)]
#[serde(untagged)]
enum WholeNumber {
    Int(u64),
    Float(f64),
}

fn deserialize_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match WholeNumber::deserialize(deserializer)? {
        WholeNumber::Int(value) => Ok(value),
        WholeNumber::Float(value) if is_whole_u64(value) => Ok(value as u64),
        WholeNumber::Float(value) => Err(de::Error::custom(format!(
            "expected a non-negative whole number, found {}",
            value
        ))),
    }
}

fn is_whole_u64(value: f64) -> bool {
    value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < 2f64.powi(64)
}

fn deserialize_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_u64(deserializer)?;
    u32::try_from(value)
        .map_err(|_| de::Error::custom(format!("{} does not fit in u32", value)))
}

/// COCO image information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(deserialize_with = "deserialize_u64")]
    pub id: u64,
    pub file_name: String,
    #[serde(deserialize_with = "deserialize_u32")]
    pub width: u32,
    #[serde(deserialize_with = "deserialize_u32")]
    pub height: u32,
}

impl Image {
    pub fn new(id: u64, file_name: String, width: u32, height: u32) -> Self {
        Self {
            id,
            file_name,
            width,
            height,
        }
    }
}

/// COCO annotation information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default, deserialize_with = "deserialize_u64")]
    pub id: u64,
    #[serde(deserialize_with = "deserialize_u64")]
    pub image_id: u64,
    pub category_id: i64,
    pub bbox: CocoBox,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub iscrowd: u8,
}

/// Complete COCO dataset structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CocoFile {
    pub images: Vec<Image>,
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Accumulates images and annotations, handing out sequential ids.
#[derive(Debug, Default)]
pub struct CocoWriter {
    next_image_id: u64,
    next_annotation_id: u64,
    coco: CocoFile,
}

impl CocoWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register categories; each name gets its position in `names` as id.
    pub fn add_categories<S: AsRef<str>>(&mut self, names: &[S]) {
        self.coco.categories = names
            .iter()
            .enumerate()
            .map(|(id, name)| Category {
                id: id as i64,
                name: name.as_ref().to_string(),
                supercategory: default_supercategory(),
            })
            .collect();
    }

    /// Add an image to the dataset and return its id
    pub fn add_image(&mut self, file_name: String, width: u32, height: u32) -> u64 {
        let image_id = self.next_image_id;
        self.next_image_id += 1;
        self.coco
            .images
            .push(Image::new(image_id, file_name, width, height));
        image_id
    }

    /// Add an annotation to the dataset and return its id
    pub fn add_annotation(&mut self, image_id: u64, category_id: i64, bbox: CocoBox) -> u64 {
        let annotation_id = self.next_annotation_id;
        self.next_annotation_id += 1;
        self.coco.annotations.push(Annotation {
            id: annotation_id,
            image_id,
            category_id,
            bbox,
            area: bbox.area(),
            iscrowd: 0,
        });
        annotation_id
    }

    pub fn build(self) -> CocoFile {
        self.coco
    }
}

use std::fs;
use std::path::Path;

use levelprint_types::{Category, ClassifiedPoint};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LevelError, LevelResult};
use crate::object::LevelObject;
use crate::parser::parse_level_string;

/// How a level input file is encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    /// Decoded level string.
    LevelString,
    /// JSON array of [`PointRecord`]s.
    Json,
}

impl InputFormat {
    /// `.json` files are JSON; everything else is a level string.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::LevelString,
        }
    }
}

/// One entry of a JSON point file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointRecord {
    /// Already classified.
    Classified {
        category: Category,
        x: f64,
        y: f64,
    },
    /// Raw object, classified on load.
    Object(LevelObject),
}

impl PointRecord {
    pub fn into_point(self) -> ClassifiedPoint {
        match self {
            Self::Classified { category, x, y } => ClassifiedPoint::new(category, x, y),
            Self::Object(obj) => obj.classify(),
        }
    }
}

/// Classified points of every object in a decoded level string.
pub fn extract_points(level: &str) -> Vec<ClassifiedPoint> {
    parse_level_string(level)
        .iter()
        .map(LevelObject::classify)
        .collect()
}

/// Classified points from a JSON point file body.
pub fn parse_json_points(json: &str) -> LevelResult<Vec<ClassifiedPoint>> {
    let records: Vec<PointRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(PointRecord::into_point).collect())
}

/// Read a level file and extract its classified points.
pub fn load_points(path: &Path, format: InputFormat) -> LevelResult<Vec<ClassifiedPoint>> {
    let body = fs::read_to_string(path).map_err(|source| LevelError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let points = match format {
        InputFormat::LevelString => extract_points(body.trim()),
        InputFormat::Json => parse_json_points(&body)?,
    };
    debug!(path = %path.display(), ?format, points = points.len(), "level points loaded");
    Ok(points)
}

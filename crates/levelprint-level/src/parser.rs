//! Level string parsing.
//!
//! A decoded level string is a `;`-separated list. The first element holds
//! level settings and is skipped; every following non-empty element is one
//! object written as alternating `key,value` tokens.

use crate::object::{LevelObject, UNKNOWN_OBJECT_ID};

const KEY_OBJECT_ID: &str = "1";
const KEY_X: &str = "2";
const KEY_Y: &str = "3";

/// Parse every object of a decoded level string.
///
/// Never fails: a string without `;` has no objects, and malformed objects
/// fall back to the sentinel id and a zero position.
pub fn parse_level_string(level: &str) -> Vec<LevelObject> {
    let Some((_, objects)) = level.split_once(';') else {
        return Vec::new();
    };
    objects
        .split(';')
        .filter(|chunk| !chunk.trim().is_empty())
        .map(parse_object)
        .collect()
}

/// Parse one `key,value,key,value,...` object chunk.
///
/// Unknown keys are ignored. A missing or non-integer id becomes `-1`; a
/// missing or non-numeric coordinate becomes `0.0`. When a key repeats, the
/// last value wins.
pub fn parse_object(chunk: &str) -> LevelObject {
    let mut object_id: Option<&str> = None;
    let mut x: Option<&str> = None;
    let mut y: Option<&str> = None;

    let mut tokens = chunk.split(',');
    while let Some(key) = tokens.next() {
        let value = tokens.next();
        match key.trim() {
            KEY_OBJECT_ID => object_id = value,
            KEY_X => x = value,
            KEY_Y => y = value,
            _ => {}
        }
    }

    LevelObject {
        object_id: object_id
            .and_then(parse_id)
            .unwrap_or(UNKNOWN_OBJECT_ID),
        x: x.and_then(parse_coordinate).unwrap_or(0.0),
        y: y.and_then(parse_coordinate).unwrap_or(0.0),
    }
}

fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    raw.parse::<i64>().ok().or_else(|| {
        // Ids written as whole floats ("8.0") still name an object.
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .map(|v| v as i64)
    })
}

fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

use levelprint_types::ClassifiedPoint;
use serde::{Deserialize, Serialize};

/// Sentinel object id for a missing or unparseable id.
pub const UNKNOWN_OBJECT_ID: i64 = -1;

/// One placed object as read from a level, before classification.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelObject {
    #[serde(rename = "id")]
    pub object_id: i64,
    pub x: f64,
    pub y: f64,
}

impl LevelObject {
    pub fn new(object_id: i64, x: f64, y: f64) -> Self {
        Self { object_id, x, y }
    }

    pub fn classify(&self) -> ClassifiedPoint {
        ClassifiedPoint::from_object(self.object_id, self.x, self.y)
    }
}

impl Default for LevelObject {
    fn default() -> Self {
        Self::new(UNKNOWN_OBJECT_ID, 0.0, 0.0)
    }
}

use serde::{Deserialize, Serialize};

use crate::category::{classify, Category};

/// A categorized 2D position of one placed level object.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedPoint {
    pub category: Category,
    pub x: f64,
    pub y: f64,
}

impl ClassifiedPoint {
    pub fn new(category: Category, x: f64, y: f64) -> Self {
        Self { category, x, y }
    }

    /// Classify a raw object id and attach its position.
    pub fn from_object(object_id: i64, x: f64, y: f64) -> Self {
        Self::new(classify(object_id), x, y)
    }

    /// The same point moved by `(-dx, -dy)`.
    pub fn shifted(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.category, self.x - dx, self.y - dy)
    }

    /// Euclidean distance squared to another point.
    pub fn distance_squared(&self, other: &ClassifiedPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

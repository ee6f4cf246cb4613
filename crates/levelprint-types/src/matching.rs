use std::fmt;

use serde::{Deserialize, Serialize};

/// A stored level that resembles a query, with its similarity score in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: u32,
    pub score: f64,
}

impl Match {
    pub fn new(id: u32, score: f64) -> Self {
        Self { id, score }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id={} score={:.4}", self.id, self.score)
    }
}

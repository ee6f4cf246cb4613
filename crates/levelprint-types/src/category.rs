use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::object_ids::{HAZARD_OBJECTS, OTHER_OBJECTS, SOLID_OBJECTS};

/// The closed set of object classes a level object is bucketed into.
///
/// The declaration order is the segment order inside a [`Fingerprint`]
/// and must never change: solid, hazard, other, none.
///
/// [`Fingerprint`]: crate::Fingerprint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Blocks and platforms the player can stand on.
    Solid,
    /// Spikes, saws, and anything that kills on contact.
    Hazard,
    /// Gameplay objects: portals, orbs, pads, coins.
    Other,
    /// Decoration and anything not in the tables.
    None,
}

impl Category {
    /// All categories in fingerprint segment order.
    pub const ALL: [Category; 4] = [
        Category::Solid,
        Category::Hazard,
        Category::Other,
        Category::None,
    ];

    /// Position of this category's segment within a fingerprint.
    pub const fn index(self) -> usize {
        match self {
            Self::Solid => 0,
            Self::Hazard => 1,
            Self::Other => 2,
            Self::None => 3,
        }
    }

    /// Lowercase name as used on disk and in JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Hazard => "hazard",
            Self::Other => "other",
            Self::None => "none",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(Self::Solid),
            "hazard" => Ok(Self::Hazard),
            "other" => Ok(Self::Other),
            "none" => Ok(Self::None),
            _ => Err(TypeError::UnknownCategory(s.to_string())),
        }
    }
}

/// Classify a raw object-type identifier.
///
/// Never fails: ids missing from every table, including the `-1` sentinel
/// used for unparseable ids, classify as [`Category::None`].
pub fn classify(object_id: i64) -> Category {
    if SOLID_OBJECTS.binary_search(&object_id).is_ok() {
        Category::Solid
    } else if HAZARD_OBJECTS.binary_search(&object_id).is_ok() {
        Category::Hazard
    } else if OTHER_OBJECTS.binary_search(&object_id).is_ok() {
        Category::Other
    } else {
        Category::None
    }
}

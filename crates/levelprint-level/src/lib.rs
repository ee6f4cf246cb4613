//! Level input for levelprint.
//!
//! Turns level data into the classified points the fingerprint pipeline
//! consumes. Two inputs are understood:
//!
//! - decoded level strings (`header;key,value,...;key,value,...;`), where
//!   key `1` is the object id and keys `2`/`3` are the x/y position
//! - JSON point files, either raw objects (`{"id", "x", "y"}`) or already
//!   classified points (`{"category", "x", "y"}`)
//!
//! Decoding the compressed level container (base64 and gzip inside a plist)
//! is left to the caller.

pub mod error;
pub mod object;
pub mod parser;
pub mod points;

pub use error::{LevelError, LevelResult};
pub use object::LevelObject;
pub use parser::{parse_level_string, parse_object};
pub use points::{extract_points, load_points, parse_json_points, InputFormat, PointRecord};

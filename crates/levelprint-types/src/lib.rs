//! Foundation types for levelprint.
//!
//! This crate provides the data model shared by every other levelprint crate:
//! the closed set of object categories, the classified points that feed the
//! signature builder, the fixed-size fingerprint, and match results.
//!
//! # Key Types
//!
//! - [`Category`] -- Object class used to bucket points (solid, hazard, other, none)
//! - [`ClassifiedPoint`] -- A categorized 2D position of one placed level object
//! - [`Fingerprint`] -- Fixed 1024-byte histogram signature of a level layout
//! - [`Match`] -- A stored level id paired with its similarity score
//!
//! The object classifier ([`classify`]) lives here as well, since it is a pure
//! table lookup with no dependencies beyond [`Category`].

pub mod category;
pub mod error;
pub mod fingerprint;
pub mod matching;
pub mod object_ids;
pub mod point;

pub use category::{classify, Category};
pub use error::TypeError;
pub use fingerprint::{
    Fingerprint, BINS, BYTES_PER_BIN, FINGERPRINT_SIZE, FINGERPRINT_SLOTS, TYPE_COUNT,
};
pub use matching::Match;
pub use point::ClassifiedPoint;

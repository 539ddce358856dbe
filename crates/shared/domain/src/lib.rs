//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O and no parsing of user text, just data and simple helpers.

pub mod config;
pub mod coordinate;

pub use crate::coordinate::{Coordinate, CoordinateSource, Location, OutOfRange};

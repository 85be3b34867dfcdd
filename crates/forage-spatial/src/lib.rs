//! `forage-spatial` — foodspot perception index and the detector seam.
//!
//! # Crate layout
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`detector`] | `Detector` trait (+ blanket impl for closures)  |
//! | [`index`]    | `FoodspotIndex` (R-tree + perception radius)    |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`              |
//!
//! The walk and scan layers consume perception exclusively through the
//! [`Detector`] trait; [`FoodspotIndex`] is the default implementation.

pub mod detector;
pub mod error;
pub mod index;


pub use detector::Detector;
pub use error::{SpatialError, SpatialResult};
pub use index::FoodspotIndex;

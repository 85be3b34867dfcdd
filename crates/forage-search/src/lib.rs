//! `forage-search` — finding the first perceptible foodspot along a walk.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`scan`]     | `SegmentScanner` — incremental detection along one segment   |
//! | [`walk`]     | `path_with_food`, `foodwalk`, `Detection`, `WalkOutcome`     |
//! | [`strategy`] | `straight_foodwalk`, `levy_foodwalk`, state-advance companion |
//! | [`batch`]    | independent-provider batch runner                            |
//! | [`error`]    | `SearchError`, `SearchResult<T>`                             |
//!
//! # Search model
//!
//! A walk is searched segment by segment: the scanner samples each segment
//! at arc-length increments of `eps`, probing the detector at every sample,
//! and the first truthy probe truncates the walk at that coordinate.
//! Detection accuracy is therefore bounded by `eps` — this engine trades
//! sub-`eps` exactness for never materializing the continuum of points a
//! path passes through.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Runs batch walks on Rayon's thread pool.                  |
//! | `serde`    | Derives `Serialize`/`Deserialize` on outcome types.       |

pub mod batch;
pub mod error;
pub mod scan;
pub mod strategy;
pub mod walk;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use batch::{BatchConfig, run_levy_batch};
pub use error::{SearchError, SearchResult};
pub use scan::SegmentScanner;
pub use strategy::{
    LevyWalkConfig, StraightWalkConfig, levy_foodwalk, levy_walk_state_advance, straight_foodwalk,
};
pub use walk::{Detection, WalkOutcome, foodwalk, path_with_food};

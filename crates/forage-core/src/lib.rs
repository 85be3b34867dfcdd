//! `forage-core` — foundational types for the `forage` walk-and-search engine.
//!
//! This crate is a dependency of every other `forage-*` crate.  It
//! intentionally has no `forage-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `FoodspotId`, `WalkId`                                    |
//! | [`geo`]     | `Point`, Euclidean distance, rotation, slope/intercept    |
//! | [`rng`]     | `DistributionProvider` trait, `UniformProvider`,          |
//! |             | `PowerLawProvider`, `RngState`, seed mixing               |
//! | [`error`]   | `ForageError`, `ForageResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types. |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ForageError, ForageResult};
pub use geo::{Point, intercept_from_slope};
pub use ids::{FoodspotId, WalkId};
pub use rng::{DistributionProvider, PowerLawProvider, RngState, UniformProvider, mix_seed};

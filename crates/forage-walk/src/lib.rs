//! `forage-walk` — turning random draws into concrete coordinate paths.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`step`]       | `StepVector` — one polar displacement                         |
//! | [`path`]       | `Stop`, `Path` — absolute coordinates in traversal order      |
//! | [`generator`]  | `StepVectorGenerator` trait, `RandomStepGenerator`, `StepStream` |
//! | [`scheduler`]  | `CompositeWalkScheduler`, `SwitchRule`, `SwitchAfter`         |
//! | [`trim`]       | `trim_to_length`, `TrimMode`                                  |
//! | [`accumulate`] | `accumulate` — step vectors + start stop → `Path`             |
//! | [`error`]      | `WalkError`, `WalkResult<T>`                                  |
//!
//! # Execution model
//!
//! Step streams are pull-based and unbounded: a generator produces one
//! vector per call and nothing before it is called.  All randomness flows
//! through a [`DistributionProvider`][forage_core::DistributionProvider]
//! passed by `&mut` at each call, so draw order — and therefore the entire
//! walk — is reproducible from the provider's seed.  Only the trimmer and
//! the accumulator realize finite results eagerly.

pub mod accumulate;
pub mod error;
pub mod generator;
pub mod path;
pub mod scheduler;
pub mod step;
pub mod trim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use accumulate::accumulate;
pub use error::{WalkError, WalkResult};
pub use generator::{RandomStepGenerator, StepStream, StepVectorGenerator};
pub use path::{Path, Stop};
pub use scheduler::{CompositeWalkScheduler, SwitchAfter, SwitchDecision, SwitchRule, SwitchState};
pub use step::StepVector;
pub use trim::{TrimMode, trim_to_length};

//! `forage-output` — walk-outcome writers for the forage engine.
//!
//! The exposed result of a search is the
//! [`WalkOutcome`][forage_search::WalkOutcome] triple: whether (and where)
//! something was found, the explored path, and the unexplored remainder.
//! This crate serializes that shape to delimited files:
//!
//! | File                | Rows                                            |
//! |---------------------|-------------------------------------------------|
//! | `walk_outcomes.csv` | one per walk — detection summary                |
//! | `walk_stops.csv`    | one per stop — explored and remainder coordinates |
//!
//! All backends implement [`WalkWriter`]; [`CsvWalkWriter`] is the default
//! and only built-in backend.
//!
//! # Usage
//!
//! ```rust,ignore
//! use forage_output::{CsvWalkWriter, WalkWriter};
//!
//! let mut writer = CsvWalkWriter::new(Path::new("./output"))?;
//! for (i, outcome) in outcomes.iter().enumerate() {
//!     writer.write_outcome(WalkId(i as u32), outcome)?;
//! }
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;


pub use csv::CsvWalkWriter;
pub use error::{OutputError, OutputResult};
pub use row::{OutcomeRow, StopRole, StopRow};
pub use writer::WalkWriter;

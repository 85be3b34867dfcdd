//! The `WalkWriter` trait implemented by backend writers.

use forage_core::WalkId;
use forage_search::WalkOutcome;

use crate::OutputResult;

/// Sink for walk outcomes.
///
/// Implementations decompose each [`WalkOutcome`] into their own storage
/// shape; [`CsvWalkWriter`][crate::CsvWalkWriter] is the built-in backend.
pub trait WalkWriter {
    /// Record one walk's outcome under `walk_id`.
    fn write_outcome(&mut self, walk_id: WalkId, outcome: &WalkOutcome) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

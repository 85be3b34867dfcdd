//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `walk_outcomes.csv`
//! - `walk_stops.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use forage_core::WalkId;
use forage_search::WalkOutcome;

use crate::row::{OutcomeRow, StopRole, StopRow};
use crate::writer::WalkWriter;
use crate::OutputResult;

/// Writes walk outcomes to two CSV files.
pub struct CsvWalkWriter {
    outcomes: Writer<File>,
    stops:    Writer<File>,
    finished: bool,
}

impl CsvWalkWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut outcomes = Writer::from_path(dir.join("walk_outcomes.csv"))?;
        outcomes.write_record([
            "walk_id",
            "found",
            "target_ids",
            "found_x",
            "found_y",
            "stops",
            "path_length",
        ])?;

        let mut stops = Writer::from_path(dir.join("walk_stops.csv"))?;
        stops.write_record(["walk_id", "seq", "role", "x", "y", "label"])?;

        Ok(Self {
            outcomes,
            stops,
            finished: false,
        })
    }

    fn write_stop_rows(&mut self, rows: &[StopRow]) -> OutputResult<()> {
        for row in rows {
            self.stops.write_record(&[
                row.walk_id.to_string(),
                row.seq.to_string(),
                row.role.as_str().to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.label.clone(),
            ])?;
        }
        Ok(())
    }
}

impl WalkWriter for CsvWalkWriter {
    fn write_outcome(&mut self, walk_id: WalkId, outcome: &WalkOutcome) -> OutputResult<()> {
        let summary = OutcomeRow::from_outcome(walk_id, outcome);
        self.outcomes.write_record(&[
            summary.walk_id.to_string(),
            (summary.found as u8).to_string(),
            summary.target_ids,
            summary.found_x.to_string(),
            summary.found_y.to_string(),
            summary.stops.to_string(),
            summary.path_length.to_string(),
        ])?;

        let mut rows: Vec<StopRow> = outcome
            .path_until_found
            .stops
            .iter()
            .enumerate()
            .map(|(seq, stop)| StopRow::from_stop(walk_id, seq, StopRole::Path, stop))
            .collect();
        if let Some(remainder) = &outcome.remainder {
            rows.extend(
                remainder
                    .stops
                    .iter()
                    .enumerate()
                    .map(|(seq, stop)| StopRow::from_stop(walk_id, seq, StopRole::Remainder, stop)),
            );
        }
        self.write_stop_rows(&rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.outcomes.flush()?;
        self.stops.flush()?;
        Ok(())
    }
}

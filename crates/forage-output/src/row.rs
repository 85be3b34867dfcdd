//! Plain data row types written by output backends.

use forage_core::{Point, WalkId};
use forage_search::WalkOutcome;
use forage_walk::Stop;

/// Which of the outcome's two paths a stop row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopRole {
    /// The explored path, up to and including the detection stop.
    Path,
    /// The unexplored tail (present only when something was found).
    Remainder,
}

impl StopRole {
    pub fn as_str(self) -> &'static str {
        match self {
            StopRole::Path => "path",
            StopRole::Remainder => "remainder",
        }
    }
}

/// One stop of one walk's outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct StopRow {
    pub walk_id: u32,
    /// Position within the owning path, starting at 0.
    pub seq:     u32,
    pub role:    StopRole,
    pub x:       f64,
    pub y:       f64,
    /// Provenance label carried by the stop, empty if none.
    pub label:   String,
}

impl StopRow {
    pub fn from_stop(walk_id: WalkId, seq: usize, role: StopRole, stop: &Stop) -> Self {
        Self {
            walk_id: walk_id.0,
            seq:     seq as u32,
            role,
            x:       stop.x,
            y:       stop.y,
            label:   stop.label.clone().unwrap_or_default(),
        }
    }
}

/// Detection summary for one walk.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeRow {
    pub walk_id:     u32,
    pub found:       bool,
    /// `';'`-joined target ids, empty when nothing was found.
    pub target_ids:  String,
    /// Detection coordinate; `NaN` when nothing was found.
    pub found_x:     f64,
    pub found_y:     f64,
    /// Stop count of the explored path.
    pub stops:       u32,
    /// Total length of the explored path.
    pub path_length: f64,
}

impl OutcomeRow {
    pub fn from_outcome(walk_id: WalkId, outcome: &WalkOutcome) -> Self {
        let (found, target_ids, at) = match &outcome.found {
            Some(detection) => {
                let ids = detection
                    .targets
                    .iter()
                    .map(|id| id.0.to_string())
                    .collect::<Vec<_>>()
                    .join(";");
                (true, ids, detection.at)
            }
            None => (false, String::new(), Point::new(f64::NAN, f64::NAN)),
        };
        Self {
            walk_id:     walk_id.0,
            found,
            target_ids,
            found_x:     at.x,
            found_y:     at.y,
            stops:       outcome.path_until_found.len() as u32,
            path_length: outcome.path_until_found.total_length(),
        }
    }
}

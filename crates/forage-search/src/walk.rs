//! Searching a whole path and assembling the walk outcome.

use forage_core::{FoodspotId, Point};
use forage_spatial::Detector;
use forage_walk::{Path, Stop};

use crate::{SearchError, SearchResult, SegmentScanner};

// ── Detection ─────────────────────────────────────────────────────────────────

/// A successful probe: which targets became perceptible, and where the
/// walker was when they did.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Detection {
    /// Non-empty collection of perceived target handles.
    pub targets: Vec<FoodspotId>,
    /// Coordinate at which they were perceived.
    pub at: Point,
}

// ── WalkOutcome ───────────────────────────────────────────────────────────────

/// The full result of searching one walk.
///
/// `path_until_found` ends at the detection coordinate when something was
/// found, or at the final stop when nothing was.  `remainder` is `None`
/// when nothing was found (it would duplicate `path_until_found`);
/// otherwise it is the unexplored tail of the original path, starting at
/// the stop that opens the segment containing the detection — one shared
/// junction stop and one partially-explored segment of overlap, which is
/// exactly what [`reconstruct`][Self::reconstruct] needs to rebuild the
/// original path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkOutcome {
    pub found:            Option<Detection>,
    pub path_until_found: Path,
    pub remainder:        Option<Path>,
}

impl WalkOutcome {
    /// Rebuild the original untruncated path: drop the synthesized
    /// detection stop, then append the remainder minus its shared junction
    /// stop.  With no detection this is simply the explored path.
    pub fn reconstruct(&self) -> Path {
        match &self.remainder {
            None => self.path_until_found.clone(),
            Some(remainder) => {
                let explored = &self.path_until_found.stops;
                let mut stops: Vec<Stop> = explored[..explored.len() - 1].to_vec();
                stops.extend_from_slice(&remainder.stops[1..]);
                Path::new(stops)
            }
        }
    }
}

// ── Search drivers ────────────────────────────────────────────────────────────

/// Scan a path's segments in traversal order and truncate at the first
/// detection.
///
/// Returns the detection (if any) together with the explored path: the
/// stops up to the segment containing the detection plus an unlabeled stop
/// at the detection coordinate, or a clone of the whole path when nothing
/// was perceptible anywhere along it.
///
/// # Errors
///
/// `SearchError::PathTooShort` when the path has fewer than 2 stops — a
/// walk with no segments cannot be searched.
pub fn path_with_food<D: Detector>(
    detector: &D,
    scanner:  &SegmentScanner,
    path:     &Path,
) -> SearchResult<(Option<Detection>, Path)> {
    if path.len() < 2 {
        return Err(SearchError::PathTooShort { got: path.len() });
    }

    for (i, (from, to)) in path.segments().enumerate() {
        if let Some(found) = scanner.find_in_segment(detector, from, to) {
            let mut stops: Vec<Stop> = path.stops[..=i].to_vec();
            stops.push(Stop::at(found.at));
            return Ok((Some(found), Path::new(stops)));
        }
    }
    Ok((None, path.clone()))
}

/// Search a walk and package the full [`WalkOutcome`].
///
/// Consumes the path so the unexplored tail can be retained without a
/// second copy when a detection occurs.
pub fn foodwalk<D: Detector>(
    detector: &D,
    scanner:  &SegmentScanner,
    path:     Path,
) -> SearchResult<WalkOutcome> {
    let (found, path_until_found) = path_with_food(detector, scanner, &path)?;

    let remainder = found.as_ref().map(|_| {
        // Two stops before the end of the explored path = the stop opening
        // the segment that contains the detection.
        let cut = path_until_found.len() - 2;
        Path::new(path.stops[cut..].to_vec())
    });

    Ok(WalkOutcome { found, path_until_found, remainder })
}

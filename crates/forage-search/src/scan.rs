//! Incremental detection along one segment.
//!
//! # Steepness normalization
//!
//! Scanning advances the x-coordinate by a fixed fraction of `eps` and
//! derives y from the slope.  On a near-vertical segment that breaks down:
//! the x-increment collapses toward zero while the y-increment blows up,
//! and rounding can leave the probe point stuck.  Segments whose slope is
//! undefined or steeper than the threshold are therefore scanned with the
//! axes swapped — both endpoints transposed, the slope inverted, and the
//! detector wrapped so it still sees real-world coordinates.  After the
//! swap the effective slope is at most 1, so the x-axis of the scan is
//! always the segment's dominant axis.
//!
//! # Termination
//!
//! The loop stops when the probe's x-coordinate *equals* the ending
//! x-coordinate — only x is compared, never y.  Post-normalization, x
//! strictly advances by at least `eps / √2` per iteration and is clamped
//! onto the endpoint rather than past it, so equality is reached in
//! `O(segment length / eps)` steps.  Comparing y instead could loop
//! forever: at slopes near zero the y-increment can round away entirely.
//! The residual y-discrepancy at the endpoint stays below the scan
//! resolution.

use forage_core::Point;
use forage_spatial::Detector;

use crate::walk::Detection;
use crate::{SearchError, SearchResult};

/// Slope magnitude above which a segment is scanned axis-swapped.
pub const DEFAULT_STEEPNESS_THRESHOLD: f64 = 1.0;

/// Scans segments at fixed arc-length increments, reporting the first
/// point from which the detector perceives anything.
///
/// Detection accuracy is bounded by `eps`: the scanner probes at most
/// every `eps` along the segment and never between probes.
#[derive(Debug, Clone, Copy)]
pub struct SegmentScanner {
    eps:                 f64,
    steepness_threshold: f64,
}

impl SegmentScanner {
    /// Scanner with increment `eps > 0` and the default steepness threshold.
    pub fn new(eps: f64) -> SearchResult<Self> {
        Self::with_threshold(eps, DEFAULT_STEEPNESS_THRESHOLD)
    }

    /// Scanner with an explicit steepness threshold (rarely needed).
    pub fn with_threshold(eps: f64, steepness_threshold: f64) -> SearchResult<Self> {
        if !(eps > 0.0) || !eps.is_finite() {
            return Err(SearchError::NonPositiveEps(eps));
        }
        Ok(Self { eps, steepness_threshold })
    }

    #[inline]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Scan from `p1` toward `p2`, returning the first detection or `None`.
    ///
    /// A degenerate segment (`p1 == p2`) is a single probe at that point.
    pub fn find_in_segment<D: Detector>(
        &self,
        detector: &D,
        p1: Point,
        p2: Point,
    ) -> Option<Detection> {
        if p1 == p2 {
            return detector
                .look(p1.x, p1.y)
                .map(|targets| Detection { targets, at: p1 });
        }

        let slope = p1.slope_to(p2);
        if !slope.is_finite() || slope.abs() > self.steepness_threshold {
            // Steep or vertical: swap axis roles.  1/±∞ is 0, so a vertical
            // segment scans as a horizontal one.
            let inverse = if slope.is_finite() { slope.recip() } else { 0.0 };
            let transposed = |x: f64, y: f64| detector.look(y, x);
            scan_shallow(&transposed, self.eps, p1.swapped(), p2.swapped(), inverse)
                .map(|found| Detection { at: found.at.swapped(), ..found })
        } else {
            scan_shallow(detector, self.eps, p1, p2, slope)
        }
    }
}

/// Core loop over a segment already normalized to `|slope| <= 1`.
fn scan_shallow<D: Detector>(
    detector: &D,
    eps:      f64,
    p1:       Point,
    p2:       Point,
    slope:    f64,
) -> Option<Detection> {
    // Decompose the arc-length increment into per-axis increments via the
    // right-triangle relation, then sign them by travel direction.
    let x_eps = eps / (1.0 + slope * slope).sqrt();
    let y_eps = (slope * x_eps).abs();
    let x_step = if p2.x >= p1.x { x_eps } else { -x_eps };
    let y_step = if p2.y >= p1.y { y_eps } else { -y_eps };

    let mut x = p1.x;
    let mut y = p1.y;
    loop {
        if let Some(targets) = detector.look(x, y) {
            return Some(Detection { targets, at: Point::new(x, y) });
        }
        if x == p2.x {
            return None;
        }

        x += x_step;
        y += y_step;
        // Clamp each axis onto its endpoint so the final probe lands exactly
        // on x2 and the y drift stays within one increment.
        if (x_step >= 0.0 && x > p2.x) || (x_step < 0.0 && x < p2.x) {
            x = p2.x;
        }
        if (y_step >= 0.0 && y > p2.y) || (y_step < 0.0 && y < p2.y) {
            y = p2.y;
        }
    }
}

//! Named search strategies composed from the walk and scan layers.
//!
//! Each driver documents its provider draw order; reproducing a run means
//! seeding identically and calling the same drivers in the same order.

use forage_core::{DistributionProvider, Point};
use forage_spatial::Detector;
use forage_walk::{
    RandomStepGenerator, StepStream, StepVector, Stop, TrimMode, accumulate, trim_to_length,
};

use crate::{SearchResult, SegmentScanner, WalkOutcome, foodwalk};

// ── Straight walk ─────────────────────────────────────────────────────────────

/// Configuration for [`straight_foodwalk`].
#[derive(Debug, Clone)]
pub struct StraightWalkConfig {
    /// Where the walk begins (before any pad displacement).
    pub start: Point,
    /// Total length of the single straight segment.
    pub max_path_len: f64,
    /// Fixed heading; drawn from the provider when `None`.
    pub direction: Option<f64>,
    /// When set, the start is displaced by a random pad: a drawn angle and
    /// a drawn length in `[0, max_pad]`.
    pub max_pad: Option<f64>,
    /// Label attached to the walk's steps (and thus its stops).
    pub label: Option<String>,
}

impl StraightWalkConfig {
    pub fn new(start: Point, max_path_len: f64) -> Self {
        Self {
            start,
            max_path_len,
            direction: None,
            max_pad: None,
            label: None,
        }
    }
}

/// Walk one straight segment and search it.
///
/// Draw order (only the draws the config enables): heading when
/// `direction` is `None`, then pad angle, then pad length.  Negative
/// `max_path_len` is clamped to zero, which surfaces as
/// [`PathTooShort`][crate::SearchError::PathTooShort] — a zero-length
/// straight walk has nothing to search.
pub fn straight_foodwalk<D, P>(
    detector: &D,
    scanner:  &SegmentScanner,
    provider: &mut P,
    config:   &StraightWalkConfig,
) -> SearchResult<WalkOutcome>
where
    D: Detector,
    P: DistributionProvider,
{
    let length = config.max_path_len.max(0.0);
    let direction = match config.direction {
        Some(direction) => direction,
        None => provider.next_angle(),
    };
    let start = match config.max_pad {
        Some(max_pad) => {
            let pad_angle = provider.next_angle();
            let pad_len = provider.next_length_in(0.0, max_pad);
            let pad = Point::new(pad_len, 0.0).rotate(pad_angle);
            config.start.offset(pad.x, pad.y)
        }
        None => config.start,
    };

    // A zero-length walk accumulates no step at all, so the search
    // precondition reports the misuse instead of probing a degenerate
    // segment.
    let steps = if length > 0.0 {
        vec![StepVector {
            direction,
            length,
            label: config.label.clone(),
        }]
    } else {
        vec![]
    };
    let path = accumulate(Stop::at(start), &steps);
    foodwalk(detector, scanner, path)
}

// ── Lévy walk ─────────────────────────────────────────────────────────────────

/// Configuration for [`levy_foodwalk`] and
/// [`levy_walk_state_advance`].
#[derive(Debug, Clone)]
pub struct LevyWalkConfig {
    /// Where the walk begins.
    pub start: Point,
    /// Target total path length handed to the trimmer.
    pub max_path_len: f64,
    /// When set, replaces the first step's direction *after* it is drawn,
    /// so the provider draw count does not depend on this option.
    pub first_direction: Option<f64>,
    /// Truncation bounds for each step length draw.
    pub length_bounds: Option<(f64, f64)>,
    /// How the final step is handled at the length cap.
    pub trim: TrimMode,
    /// Label attached to every step of the walk.
    pub label: Option<String>,
}

impl LevyWalkConfig {
    pub fn new(start: Point, max_path_len: f64) -> Self {
        Self {
            start,
            max_path_len,
            first_direction: None,
            length_bounds: None,
            trim: TrimMode::Exact,
            label: None,
        }
    }
}

/// Walk a Lévy path (heavy-tailed step lengths, uniform headings) capped
/// at `max_path_len`, and search it.
///
/// Draw order: per step, one angle then one length, for exactly as many
/// steps as the trimmer consumes.  [`levy_walk_state_advance`] performs
/// the identical draws without the search.
pub fn levy_foodwalk<D, P>(
    detector: &D,
    scanner:  &SegmentScanner,
    provider: &mut P,
    config:   &LevyWalkConfig,
) -> SearchResult<WalkOutcome>
where
    D: Detector,
    P: DistributionProvider,
{
    let steps = draw_levy_steps(provider, config);
    let path = accumulate(Stop::at(config.start), &steps);
    foodwalk(detector, scanner, path)
}

/// Advance `provider` by exactly the draws [`levy_foodwalk`] would make
/// for `config`, without walking or searching.  Returns the number of
/// steps drawn.
///
/// Use this to keep runs that share one provider state-matched: a run
/// that skips its walk still consumes the same randomness as one that
/// performs it.
pub fn levy_walk_state_advance<P: DistributionProvider>(
    provider: &mut P,
    config:   &LevyWalkConfig,
) -> usize {
    draw_levy_steps(provider, config).len()
}

/// The single source of Lévy draws — shared by the walk and its
/// state-advance companion so their draw sequences cannot diverge.
fn draw_levy_steps<P: DistributionProvider>(
    provider: &mut P,
    config:   &LevyWalkConfig,
) -> Vec<StepVector> {
    let mut generator = match config.length_bounds {
        Some((low, high)) => RandomStepGenerator::bounded(low, high),
        None => RandomStepGenerator::new(),
    };
    let target = config.max_path_len.max(0.0);
    let mut steps = trim_to_length(
        target,
        StepStream::new(&mut generator, provider),
        config.trim,
    );

    if let Some(direction) = config.first_direction
        && let Some(first) = steps.first_mut()
    {
        first.direction = direction;
    }
    if let Some(label) = &config.label {
        for step in &mut steps {
            step.label = Some(label.clone());
        }
    }
    steps
}

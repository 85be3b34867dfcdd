//! Cutting an unbounded step stream down to a target total length.

use crate::StepVector;

/// What to do with the final step vector once the running length sum
/// reaches the target.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TrimMode {
    /// Shrink the final vector (direction and label unchanged) so the
    /// returned list's total length equals the target exactly.
    #[default]
    Exact,
    /// Keep the final vector whole; the total may exceed the target by
    /// less than that vector's full length.
    Overshoot,
}

/// Consume `steps` until their running length sum reaches `target`, and
/// return the consumed prefix.
///
/// Assumes `target >= 0`; callers clamp negative targets before calling.
/// A finite stream that exhausts before reaching the target is not an
/// error — the shorter-than-requested list is returned as-is.  With
/// `target == 0` nothing is consumed and the result is empty.
pub fn trim_to_length(
    target: f64,
    steps:  impl IntoIterator<Item = StepVector>,
    mode:   TrimMode,
) -> Vec<StepVector> {
    let mut out = Vec::new();
    let mut sum = 0.0;
    let mut steps = steps.into_iter();

    while sum < target {
        let Some(step) = steps.next() else {
            // Exhausted stream: a short result, not an error.
            return out;
        };
        sum += step.length;
        out.push(step);
    }

    if mode == TrimMode::Exact
        && sum > target
        && let Some(last) = out.last_mut()
    {
        last.length -= sum - target;
    }
    out
}

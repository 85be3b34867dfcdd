//! The `StepVectorGenerator` trait — the extension point for step sources.

use forage_core::DistributionProvider;

use crate::StepVector;

/// Pluggable source of step vectors.
///
/// A generator produces exactly one [`StepVector`] per call, drawing from
/// the provider it is handed.  The produced sequence is **infinite and not
/// restartable**: the only way to replay it is to rebuild the provider from
/// identical state (see
/// [`DistributionProvider::save_state`]).
///
/// The provider is passed at call time rather than owned, so several
/// generators — e.g. the arms of a
/// [`CompositeWalkScheduler`][crate::CompositeWalkScheduler] — can share
/// one provider while the borrow checker rules out interleaved mutation.
pub trait StepVectorGenerator<P: DistributionProvider> {
    /// Produce the next step.  Advances the provider's internal state; no
    /// other side effects.
    fn next_step(&mut self, provider: &mut P) -> StepVector;
}

// ── RandomStepGenerator ───────────────────────────────────────────────────────

/// Draws each step's direction and length directly from the provider.
///
/// Per step: one angle draw, then one length draw — bounded by
/// `length_bounds` when set.  Exactly two provider draws per step, always
/// in that order, so walks stay reproducible under composition.
#[derive(Debug, Clone, Default)]
pub struct RandomStepGenerator {
    /// When set, lengths are drawn truncated to `[low, high]`.
    pub length_bounds: Option<(f64, f64)>,
}

impl RandomStepGenerator {
    pub fn new() -> Self {
        Self { length_bounds: None }
    }

    pub fn bounded(low: f64, high: f64) -> Self {
        Self { length_bounds: Some((low, high)) }
    }
}

impl<P: DistributionProvider> StepVectorGenerator<P> for RandomStepGenerator {
    fn next_step(&mut self, provider: &mut P) -> StepVector {
        let direction = provider.next_angle();
        let length = match self.length_bounds {
            Some((low, high)) => provider.next_length_in(low, high),
            None => provider.next_length(),
        };
        StepVector::new(direction, length)
    }
}

// ── StepStream ────────────────────────────────────────────────────────────────

/// Adapts a generator + provider pair into an `Iterator` so downstream
/// consumers ([`trim_to_length`][crate::trim_to_length], `take`, …) can
/// pull steps lazily.
///
/// The iterator never returns `None`; consumers are responsible for
/// bounding how much they pull.
pub struct StepStream<'a, G, P> {
    generator: &'a mut G,
    provider:  &'a mut P,
}

impl<'a, G, P> StepStream<'a, G, P>
where
    G: StepVectorGenerator<P>,
    P: DistributionProvider,
{
    pub fn new(generator: &'a mut G, provider: &'a mut P) -> Self {
        Self { generator, provider }
    }
}

impl<G, P> Iterator for StepStream<'_, G, P>
where
    G: StepVectorGenerator<P>,
    P: DistributionProvider,
{
    type Item = StepVector;

    #[inline]
    fn next(&mut self) -> Option<StepVector> {
        Some(self.generator.next_step(self.provider))
    }
}

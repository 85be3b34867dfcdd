//! Round-robin interleaving of step generators under switch rules.
//!
//! A composite walk splices sub-strategies: run generator 0 until its
//! switch rule says to move on, then generator 1, and so on cyclically.
//! The scheduler is itself a [`StepVectorGenerator`], so composites nest
//! and feed every downstream consumer unchanged, and generation stays
//! demand-driven — the provider is only advanced when a consumer pulls.

use forage_core::DistributionProvider;

use crate::{StepVector, StepVectorGenerator, WalkError, WalkResult};

// ── Switch rules ──────────────────────────────────────────────────────────────

/// Carry value threaded between consecutive calls of one switch rule.
///
/// The scheduler stores it without interpreting it; only the owning rule
/// gives it meaning ([`SwitchAfter`] uses it as a call counter).  It is
/// cleared whenever the scheduler advances to the next arm.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SwitchState(pub u64);

/// Verdict of a switch rule for the step just produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SwitchDecision {
    /// Keep the current arm; store the new carry for its next evaluation.
    Continue(SwitchState),
    /// Move to the next arm (cyclically) and clear the carry.
    Advance,
}

/// Decides, after each produced step, whether the current arm stays active.
pub trait SwitchRule {
    /// `carry` is `None` the first time this arm's rule runs after the
    /// scheduler switched to it (or at stream start).
    fn evaluate(&self, step: &StepVector, carry: Option<SwitchState>) -> SwitchDecision;
}

/// Switches away from the current arm after exactly `period` steps,
/// implementing fixed-length alternation between sub-strategies.
#[derive(Debug, Copy, Clone)]
pub struct SwitchAfter {
    pub period: u64,
}

impl SwitchAfter {
    pub fn new(period: u64) -> Self {
        Self { period }
    }
}

impl SwitchRule for SwitchAfter {
    fn evaluate(&self, _step: &StepVector, carry: Option<SwitchState>) -> SwitchDecision {
        let count = carry.map_or(0, |s| s.0) + 1;
        if count >= self.period {
            SwitchDecision::Advance
        } else {
            SwitchDecision::Continue(SwitchState(count))
        }
    }
}

// ── CompositeWalkScheduler ────────────────────────────────────────────────────

/// One generator/rule pairing inside the scheduler.
struct Arm<P> {
    generator: Box<dyn StepVectorGenerator<P>>,
    rule:      Box<dyn SwitchRule>,
    label:     Option<String>,
}

/// Interleaves several step generators into one unbounded stream.
///
/// Arms are visited round-robin: each produced step is handed to the
/// active arm's rule, and an [`Advance`][SwitchDecision::Advance] verdict
/// makes the *next* step come from the following arm.  The step that
/// triggered the switch is still emitted from the arm that produced it.
///
/// Labels, when supplied, are attached to every step an arm emits so the
/// resulting stops record which sub-strategy visited them.
pub struct CompositeWalkScheduler<P> {
    arms:    Vec<Arm<P>>,
    current: usize,
    carry:   Option<SwitchState>,
}

impl<P: DistributionProvider> CompositeWalkScheduler<P> {
    /// Build from parallel lists of generators and rules, cyclically
    /// paired in order.  The lists must be non-empty and of equal length.
    pub fn from_parts(
        generators: Vec<Box<dyn StepVectorGenerator<P>>>,
        rules:      Vec<Box<dyn SwitchRule>>,
    ) -> WalkResult<Self> {
        Self::from_labeled_parts(generators, rules, None)
    }

    /// As [`from_parts`][Self::from_parts], with one label per arm.
    pub fn from_labeled_parts(
        generators: Vec<Box<dyn StepVectorGenerator<P>>>,
        rules:      Vec<Box<dyn SwitchRule>>,
        labels:     Option<Vec<String>>,
    ) -> WalkResult<Self> {
        if generators.is_empty() {
            return Err(WalkError::NoArms);
        }
        if rules.len() != generators.len() {
            return Err(WalkError::ArmCountMismatch {
                expected: generators.len(),
                got:      rules.len(),
                what:     "switch rules",
            });
        }
        if let Some(labels) = &labels
            && labels.len() != generators.len()
        {
            return Err(WalkError::ArmCountMismatch {
                expected: generators.len(),
                got:      labels.len(),
                what:     "labels",
            });
        }

        let mut labels = labels.map(|l| l.into_iter());
        let arms = generators
            .into_iter()
            .zip(rules)
            .map(|(generator, rule)| Arm {
                generator,
                rule,
                label: labels.as_mut().and_then(|l| l.next()),
            })
            .collect();

        Ok(Self { arms, current: 0, carry: None })
    }

    /// Index of the arm the next step will come from.
    pub fn current_arm(&self) -> usize {
        self.current
    }
}

impl<P: DistributionProvider> StepVectorGenerator<P> for CompositeWalkScheduler<P> {
    fn next_step(&mut self, provider: &mut P) -> StepVector {
        let arm = &mut self.arms[self.current];
        let mut step = arm.generator.next_step(provider);
        if step.label.is_none() {
            step.label = arm.label.clone();
        }
        match arm.rule.evaluate(&step, self.carry) {
            SwitchDecision::Continue(state) => self.carry = Some(state),
            SwitchDecision::Advance => {
                self.current = (self.current + 1) % self.arms.len();
                self.carry = None;
            }
        }
        step
    }
}

//! Random-distribution providers — the only stateful resource in the engine.
//!
//! # Determinism strategy
//!
//! Every stochastic component draws through an explicit
//! [`DistributionProvider`] passed by `&mut` reference; there is no ambient
//! or global RNG.  Each draw mutates the provider, so reproducibility is a
//! matter of (a) seeding identically and (b) drawing in the same order.
//! Draw order is part of every caller's documented contract.
//!
//! Providers expose [`save_state`][DistributionProvider::save_state] /
//! [`restore_state`][DistributionProvider::restore_state] so a caller can
//! checkpoint a run and replay alternatives from the same point.  Concurrent
//! draws from one provider are unrepresentable (`&mut`); parallel runs each
//! build their own provider, typically seeded via [`mix_seed`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{ForageError, ForageResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Derive the seed for run `offset` of a batch from a single master seed.
///
/// The mixing constant spreads consecutive offsets uniformly across the
/// seed space, so runs never share RNG state and adding runs at the end of
/// a batch does not disturb the seeds of existing runs.
#[inline]
pub fn mix_seed(master_seed: u64, offset: u64) -> u64 {
    master_seed ^ offset.wrapping_mul(MIXING_CONSTANT)
}

// ── DistributionProvider ──────────────────────────────────────────────────────

/// Source of random step directions and step lengths.
///
/// Implementations pair a length distribution with a deterministic RNG.
/// Directions are always uniform over the full circle; lengths follow the
/// implementation's distribution, optionally truncated per draw via
/// [`next_length_in`][Self::next_length_in].
pub trait DistributionProvider {
    /// Opaque checkpoint of the provider's internal RNG state.
    type State: Clone;

    /// A direction in `[0, 2π)` radians, uniformly distributed.
    fn next_angle(&mut self) -> f64;

    /// A non-negative length drawn from the provider's distribution.
    fn next_length(&mut self) -> f64;

    /// A length drawn from the provider's distribution truncated to
    /// `[low, high]`, intersected with the distribution's support.
    /// Assumes `0 <= low <= high`; callers own that contract.
    fn next_length_in(&mut self, low: f64, high: f64) -> f64;

    /// Checkpoint the internal state.
    fn save_state(&self) -> Self::State;

    /// Rewind to a previously saved checkpoint.  Draws after a restore
    /// replay exactly the draws made after the corresponding save.
    fn restore_state(&mut self, state: Self::State);
}

/// Opaque RNG checkpoint shared by the concrete providers in this crate.
///
/// The blob round-trips through `save_state`/`restore_state` and means
/// nothing anywhere else.
#[derive(Clone)]
pub struct RngState(SmallRng);

// ── UniformProvider ───────────────────────────────────────────────────────────

/// Uniform step lengths in `[low, high)`, uniform directions.
pub struct UniformProvider {
    rng:  SmallRng,
    low:  f64,
    high: f64,
}

impl UniformProvider {
    /// Seed a provider drawing lengths uniformly from `[low, high)`.
    pub fn seeded(seed: u64, low: f64, high: f64) -> ForageResult<Self> {
        if !(0.0..=high).contains(&low) || !high.is_finite() {
            return Err(ForageError::InvalidBounds { low, high });
        }
        Ok(Self {
            rng: SmallRng::seed_from_u64(seed),
            low,
            high,
        })
    }
}

impl DistributionProvider for UniformProvider {
    type State = RngState;

    #[inline]
    fn next_angle(&mut self) -> f64 {
        self.rng.gen_range(0.0..std::f64::consts::TAU)
    }

    #[inline]
    fn next_length(&mut self) -> f64 {
        self.rng.gen_range(self.low..=self.high)
    }

    #[inline]
    fn next_length_in(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low..=high)
    }

    fn save_state(&self) -> RngState {
        RngState(self.rng.clone())
    }

    fn restore_state(&mut self, state: RngState) {
        self.rng = state.0;
    }
}

// ── PowerLawProvider ──────────────────────────────────────────────────────────

/// Power-law ("Lévy-like") step lengths: `p(l) ∝ l^-exponent` for
/// `l >= min_length`, uniform directions.
///
/// Sampling uses the closed-form inverse CDF in both the unbounded and the
/// truncated case, so every length costs exactly one uniform draw — no
/// rejection loop that would make the draw count data-dependent and break
/// state-matching between runs.
pub struct PowerLawProvider {
    rng:        SmallRng,
    min_length: f64,
    exponent:   f64,
}

impl PowerLawProvider {
    /// Seed a provider with scale `min_length > 0` and `exponent > 1`.
    ///
    /// Exponents in `(1, 3]` give the heavy-tailed step lengths
    /// characteristic of Lévy foraging; larger exponents approach
    /// Brownian-like motion.
    pub fn seeded(seed: u64, min_length: f64, exponent: f64) -> ForageResult<Self> {
        if exponent <= 1.0 {
            return Err(ForageError::InvalidExponent(exponent));
        }
        if min_length <= 0.0 || !min_length.is_finite() {
            return Err(ForageError::InvalidBounds { low: min_length, high: f64::INFINITY });
        }
        Ok(Self {
            rng: SmallRng::seed_from_u64(seed),
            min_length,
            exponent,
        })
    }

    #[inline]
    fn uniform(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

impl DistributionProvider for PowerLawProvider {
    type State = RngState;

    #[inline]
    fn next_angle(&mut self) -> f64 {
        self.rng.gen_range(0.0..std::f64::consts::TAU)
    }

    fn next_length(&mut self) -> f64 {
        // Inverse CDF: l = a · (1-u)^(-1/(μ-1)),  u ∈ [0, 1)  ⇒  l ∈ [a, ∞).
        let u = self.uniform();
        self.min_length * (1.0 - u).powf(-1.0 / (self.exponent - 1.0))
    }

    fn next_length_in(&mut self, low: f64, high: f64) -> f64 {
        // Inverse CDF of the power law truncated to [low, high].  With
        // t = 1 - μ:  l = (low^t + u·(high^t − low^t))^(1/t).
        // The distribution has no support below min_length, so the lower
        // bound is raised to it; a zero bound would otherwise blow up low^t.
        let low = low.max(self.min_length);
        let t = 1.0 - self.exponent;
        let lo_t = low.powf(t);
        let hi_t = high.powf(t);
        let u = self.uniform();
        (lo_t + u * (hi_t - lo_t)).powf(1.0 / t)
    }

    fn save_state(&self) -> RngState {
        RngState(self.rng.clone())
    }

    fn restore_state(&mut self, state: RngState) {
        self.rng = state.0;
    }
}

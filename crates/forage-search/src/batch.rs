//! Batches of independent walks, one provider per walk.
//!
//! The engine's providers are strictly sequential — concurrent draws from
//! one provider are unrepresentable.  Batches therefore parallelize at
//! the run level: every walk gets its own provider, deterministically
//! seeded from the batch's master seed via
//! [`mix_seed`][forage_core::mix_seed], so results are identical whether
//! the batch runs serially or on Rayon's thread pool (the `parallel`
//! feature).

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use forage_core::{DistributionProvider, mix_seed};
use forage_spatial::Detector;

use crate::{LevyWalkConfig, SearchResult, SegmentScanner, WalkOutcome, levy_foodwalk};

/// Configuration for a replicate batch.
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    /// Master seed; walk `i` uses `mix_seed(master_seed, i)`.
    pub master_seed: u64,
    /// Number of independent walks to run.
    pub walks: usize,
}

/// Run `batch.walks` independent Lévy food walks of the same configuration.
///
/// `make_provider` builds the provider for one walk from its mixed seed —
/// typically `|seed| PowerLawProvider::seeded(seed, min, mu).unwrap()` at
/// the application boundary.  Outcomes are returned in walk order.
pub fn run_levy_batch<D, P, F>(
    detector:      &D,
    scanner:       &SegmentScanner,
    batch:         &BatchConfig,
    make_provider: F,
    config:        &LevyWalkConfig,
) -> SearchResult<Vec<WalkOutcome>>
where
    D: Detector + Sync,
    P: DistributionProvider,
    F: Fn(u64) -> P + Sync,
{
    let run_one = |i: u64| {
        let mut provider = make_provider(mix_seed(batch.master_seed, i));
        levy_foodwalk(detector, scanner, &mut provider, config)
    };

    #[cfg(feature = "parallel")]
    {
        (0..batch.walks as u64).into_par_iter().map(run_one).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..batch.walks as u64).map(run_one).collect()
    }
}

//! forage-demo — smallest end-to-end example for the forage engine.
//!
//! Scatters foodspots over a square arena, then searches for them with the
//! three built-in strategies — a straight transect, a Lévy walk, and a
//! composite walk alternating ballistic relocation with local Lévy
//! scanning — and writes every outcome to `./output/*.csv`.

use std::fs;
use std::path::Path as FsPath;

use anyhow::{Context, Result};

use forage_core::{DistributionProvider, Point, PowerLawProvider, UniformProvider, WalkId, mix_seed};
use forage_output::{CsvWalkWriter, WalkWriter};
use forage_search::{
    LevyWalkConfig, SegmentScanner, StraightWalkConfig, WalkOutcome, foodwalk, levy_foodwalk,
    straight_foodwalk,
};
use forage_spatial::FoodspotIndex;
use forage_walk::{
    CompositeWalkScheduler, RandomStepGenerator, StepStream, StepVectorGenerator, Stop, SwitchAfter,
    SwitchRule, TrimMode, accumulate, trim_to_length,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const ARENA:             f64 = 1_000.0; // arena is [0, ARENA] × [0, ARENA]
const FOODSPOTS:         usize = 50;
const PERCEPTION_RADIUS: f64 = 10.0;
const EPS:               f64 = 1.0;     // scan increment — bounds detection accuracy
const MAX_PATH_LEN:      f64 = 2_000.0;
const MIN_STEP:          f64 = 5.0;
const LEVY_EXPONENT:     f64 = 2.0;
const OUTPUT_DIR:        &str = "output";

// ── World construction ────────────────────────────────────────────────────────

/// Scatter foodspots uniformly over the arena, seeded independently of the
/// walks so changing walk parameters never moves the food.
fn build_index() -> Result<FoodspotIndex> {
    let mut placer = UniformProvider::seeded(mix_seed(SEED, 0), 0.0, ARENA)?;
    let points = (0..FOODSPOTS).map(|_| (placer.next_length(), placer.next_length()));
    Ok(FoodspotIndex::from_points(PERCEPTION_RADIUS, points)?)
}

// ── Strategies ────────────────────────────────────────────────────────────────

fn run_straight(index: &FoodspotIndex, scanner: &SegmentScanner) -> Result<WalkOutcome> {
    let mut provider = UniformProvider::seeded(mix_seed(SEED, 1), MIN_STEP, MAX_PATH_LEN)?;
    let mut config = StraightWalkConfig::new(Point::new(ARENA / 2.0, ARENA / 2.0), MAX_PATH_LEN);
    config.max_pad = Some(50.0);
    config.label = Some("straight".into());
    Ok(straight_foodwalk(index, scanner, &mut provider, &config)?)
}

fn run_levy(index: &FoodspotIndex, scanner: &SegmentScanner) -> Result<WalkOutcome> {
    let mut provider = PowerLawProvider::seeded(mix_seed(SEED, 2), MIN_STEP, LEVY_EXPONENT)?;
    let mut config = LevyWalkConfig::new(Point::new(ARENA / 2.0, ARENA / 2.0), MAX_PATH_LEN);
    config.label = Some("levy".into());
    Ok(levy_foodwalk(index, scanner, &mut provider, &config)?)
}

/// Composite: long ballistic relocations (bounded-length draws) alternating
/// with bursts of unbounded Lévy scanning, four steps each.
fn run_composite(index: &FoodspotIndex, scanner: &SegmentScanner) -> Result<WalkOutcome> {
    let mut provider = PowerLawProvider::seeded(mix_seed(SEED, 3), MIN_STEP, LEVY_EXPONENT)?;

    let generators: Vec<Box<dyn StepVectorGenerator<PowerLawProvider>>> = vec![
        Box::new(RandomStepGenerator::bounded(100.0, 300.0)),
        Box::new(RandomStepGenerator::new()),
    ];
    let rules: Vec<Box<dyn SwitchRule>> = vec![
        Box::new(SwitchAfter::new(4)),
        Box::new(SwitchAfter::new(4)),
    ];
    let labels = vec!["relocate".to_string(), "scan".to_string()];
    let mut scheduler =
        CompositeWalkScheduler::from_labeled_parts(generators, rules, Some(labels))?;

    let steps = trim_to_length(
        MAX_PATH_LEN,
        StepStream::new(&mut scheduler, &mut provider),
        TrimMode::Exact,
    );
    let path = accumulate(Stop::new(ARENA / 2.0, ARENA / 2.0), &steps);
    Ok(foodwalk(index, scanner, path)?)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn report(name: &str, outcome: &WalkOutcome) {
    match &outcome.found {
        Some(detection) => println!(
            "{name:>9}: found {} target(s) at {} after {:.1} length units",
            detection.targets.len(),
            detection.at,
            outcome.path_until_found.total_length(),
        ),
        None => println!(
            "{name:>9}: nothing found over {:.1} length units",
            outcome.path_until_found.total_length(),
        ),
    }
}

fn main() -> Result<()> {
    let index = build_index()?;
    let scanner = SegmentScanner::new(EPS)?;

    let outcomes = [
        ("straight", run_straight(&index, &scanner)?),
        ("levy", run_levy(&index, &scanner)?),
        ("composite", run_composite(&index, &scanner)?),
    ];

    fs::create_dir_all(OUTPUT_DIR)?;
    let mut writer = CsvWalkWriter::new(FsPath::new(OUTPUT_DIR))
        .context("opening output CSV files")?;
    for (i, (name, outcome)) in outcomes.iter().enumerate() {
        report(name, outcome);
        writer.write_outcome(WalkId(i as u32), outcome)?;
    }
    writer.finish()?;

    println!("wrote {OUTPUT_DIR}/walk_outcomes.csv and {OUTPUT_DIR}/walk_stops.csv");
    Ok(())
}

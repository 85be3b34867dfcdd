//! Unit tests for scanning, food-walk search, and the strategy drivers.

use forage_core::FoodspotId;

/// Detector that never perceives anything.
fn nothing(_x: f64, _y: f64) -> Option<Vec<FoodspotId>> {
    None
}

#[cfg(test)]
mod scan {
    use forage_core::{Point, intercept_from_slope};

    use super::nothing;
    use crate::{SearchError, SegmentScanner};
    use forage_core::FoodspotId;

    fn scanner(eps: f64) -> SegmentScanner {
        SegmentScanner::new(eps).unwrap()
    }

    #[test]
    fn rejects_non_positive_eps() {
        assert!(matches!(
            SegmentScanner::new(0.0),
            Err(SearchError::NonPositiveEps(_))
        ));
        assert!(SegmentScanner::new(-0.5).is_err());
        assert!(SegmentScanner::new(f64::NAN).is_err());
    }

    #[test]
    fn horizontal_detection() {
        let at_five = |x: f64, _y: f64| (x == 5.0).then(|| vec![FoodspotId(3)]);
        let found = scanner(1.0)
            .find_in_segment(&at_five, Point::new(0.0, 0.0), Point::new(10.0, 0.0))
            .unwrap();
        assert_eq!(found.at, Point::new(5.0, 0.0));
        assert_eq!(found.targets, vec![FoodspotId(3)]);
    }

    #[test]
    fn vertical_detection() {
        let at_y_six = |_x: f64, y: f64| (y == 6.0).then(|| vec![FoodspotId(0)]);
        let found = scanner(2.0)
            .find_in_segment(&at_y_six, Point::new(0.0, 0.0), Point::new(0.0, 10.0))
            .unwrap();
        assert_eq!(found.at, Point::new(0.0, 6.0));
    }

    #[test]
    fn no_detection_returns_none() {
        let s = scanner(1.0);
        assert!(s.find_in_segment(&nothing, Point::new(0.0, 0.0), Point::new(10.0, 0.0)).is_none());
        assert!(s.find_in_segment(&nothing, Point::new(0.0, 0.0), Point::new(0.0, 10.0)).is_none());
        assert!(s.find_in_segment(&nothing, Point::new(3.0, 1.0), Point::new(4.0, 9.0)).is_none());
    }

    #[test]
    fn degenerate_segment_is_single_probe() {
        let p = Point::new(2.0, 2.0);
        let everywhere = |_x: f64, _y: f64| Some(vec![FoodspotId(1)]);
        let found = scanner(1.0).find_in_segment(&everywhere, p, p).unwrap();
        assert_eq!(found.at, p);
        assert!(scanner(1.0).find_in_segment(&nothing, p, p).is_none());
    }

    #[test]
    fn steep_segment_scans_swapped() {
        // Slope 10 forces the axis swap; detection past y = 5.
        let upper_half = |_x: f64, y: f64| (y >= 5.0).then(|| vec![FoodspotId(2)]);
        let found = scanner(1.0)
            .find_in_segment(&upper_half, Point::new(0.0, 0.0), Point::new(1.0, 10.0))
            .unwrap();
        // First probe at or past y = 5, within one increment of it.
        assert!(found.at.y >= 5.0 && found.at.y < 6.0, "at {}", found.at);
        // The reported point lies on the segment's carrier line.
        let intercept = intercept_from_slope(10.0, Point::new(0.0, 0.0));
        assert!((found.at.y - (10.0 * found.at.x + intercept)).abs() < 1e-9);
    }

    #[test]
    fn endpoint_is_probed_after_clamping() {
        // eps does not divide the segment; the last probe lands exactly on
        // the endpoint.
        let at_end = |x: f64, _y: f64| (x == 10.0).then(|| vec![FoodspotId(7)]);
        let found = scanner(3.0)
            .find_in_segment(&at_end, Point::new(0.0, 0.0), Point::new(10.0, 0.0))
            .unwrap();
        assert_eq!(found.at, Point::new(10.0, 0.0));
    }

    #[test]
    fn scans_in_descending_direction() {
        let at_four = |x: f64, _y: f64| (x == 4.0).then(|| vec![FoodspotId(4)]);
        let found = scanner(1.0)
            .find_in_segment(&at_four, Point::new(10.0, 0.0), Point::new(0.0, 0.0))
            .unwrap();
        assert_eq!(found.at, Point::new(4.0, 0.0));
    }
}

#[cfg(test)]
mod walk {
    use forage_walk::{Path, Stop};

    use super::nothing;
    use crate::{SearchError, SegmentScanner, foodwalk, path_with_food};
    use forage_core::FoodspotId;

    fn scanner() -> SegmentScanner {
        SegmentScanner::new(1.0).unwrap()
    }

    fn elbow() -> Path {
        Path::new(vec![
            Stop::new(0.0, 0.0),
            Stop::new(10.0, 0.0),
            Stop::new(10.0, 10.0),
        ])
    }

    #[test]
    fn rejects_short_paths() {
        let single = Path::new(vec![Stop::new(0.0, 0.0)]);
        assert!(matches!(
            path_with_food(&nothing, &scanner(), &single),
            Err(SearchError::PathTooShort { got: 1 })
        ));
    }

    #[test]
    fn no_detection_keeps_whole_path() {
        let path = elbow();
        let outcome = foodwalk(&nothing, &scanner(), path.clone()).unwrap();
        assert!(outcome.found.is_none());
        assert_eq!(outcome.path_until_found, path);
        assert!(outcome.remainder.is_none());
        assert_eq!(outcome.reconstruct(), path);
    }

    #[test]
    fn truncates_at_detection_with_overlapping_remainder() {
        // Perceptible only on the vertical leg, from y = 5 up.
        let wall = |x: f64, y: f64| (x == 10.0 && y >= 5.0).then(|| vec![FoodspotId(0)]);
        let path = elbow();
        let outcome = foodwalk(&wall, &scanner(), path.clone()).unwrap();

        let found = outcome.found.as_ref().unwrap();
        assert_eq!(found.at.x, 10.0);
        assert_eq!(found.at.y, 5.0);

        assert_eq!(
            outcome.path_until_found.stops,
            vec![Stop::new(0.0, 0.0), Stop::new(10.0, 0.0), Stop::new(10.0, 5.0)]
        );
        // Remainder opens at the stop that starts the detected segment.
        assert_eq!(
            outcome.remainder.as_ref().unwrap().stops,
            vec![Stop::new(10.0, 0.0), Stop::new(10.0, 10.0)]
        );
        assert_eq!(outcome.reconstruct(), path);
    }

    #[test]
    fn detection_on_first_segment() {
        let half = |x: f64, _y: f64| (x >= 5.0).then(|| vec![FoodspotId(0)]);
        let path = Path::new(vec![Stop::new(0.0, 0.0), Stop::new(10.0, 0.0)]);
        let outcome = foodwalk(&half, &scanner(), path.clone()).unwrap();

        assert_eq!(
            outcome.path_until_found.stops,
            vec![Stop::new(0.0, 0.0), Stop::new(5.0, 0.0)]
        );
        assert_eq!(outcome.remainder.as_ref().unwrap(), &path);
        assert_eq!(outcome.reconstruct(), path);
    }
}

#[cfg(test)]
mod strategy {
    use forage_core::{DistributionProvider, Point, PowerLawProvider, UniformProvider};

    use super::nothing;
    use crate::{
        LevyWalkConfig, SearchError, SegmentScanner, StraightWalkConfig, levy_foodwalk,
        levy_walk_state_advance, straight_foodwalk,
    };
    use forage_core::FoodspotId;

    fn scanner() -> SegmentScanner {
        SegmentScanner::new(0.5).unwrap()
    }

    fn uniform(seed: u64) -> UniformProvider {
        UniformProvider::seeded(seed, 0.5, 2.0).unwrap()
    }

    fn levy_provider(seed: u64) -> PowerLawProvider {
        PowerLawProvider::seeded(seed, 1.0, 2.0).unwrap()
    }

    #[test]
    fn straight_walk_finds_target_on_heading() {
        let half = |x: f64, _y: f64| (x >= 5.0).then(|| vec![FoodspotId(0)]);
        let mut config = StraightWalkConfig::new(Point::new(0.0, 0.0), 10.0);
        config.direction = Some(0.0);

        let outcome =
            straight_foodwalk(&half, &scanner(), &mut uniform(1), &config).unwrap();
        let found = outcome.found.unwrap();
        assert_eq!(found.at.y, 0.0);
        assert!((found.at.x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn straight_walk_without_detection_spans_full_length() {
        let mut config = StraightWalkConfig::new(Point::new(3.0, -2.0), 25.0);
        config.direction = Some(1.25);

        let outcome =
            straight_foodwalk(&nothing, &scanner(), &mut uniform(1), &config).unwrap();
        assert!(outcome.found.is_none());
        assert_eq!(outcome.path_until_found.len(), 2);
        assert!((outcome.path_until_found.total_length() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn straight_walk_pad_displaces_start() {
        let mut config = StraightWalkConfig::new(Point::new(0.0, 0.0), 5.0);
        config.direction = Some(0.0);
        config.max_pad = Some(2.0);

        let outcome =
            straight_foodwalk(&nothing, &scanner(), &mut uniform(9), &config).unwrap();
        let start = outcome.path_until_found.first().unwrap();
        let offset = Point::new(0.0, 0.0).distance(Point::new(start.x, start.y));
        assert!(offset <= 2.0 + 1e-9, "pad moved start by {offset}");
        assert!(offset > 0.0);
    }

    #[test]
    fn zero_length_walk_is_a_precondition_violation() {
        let mut config = StraightWalkConfig::new(Point::new(0.0, 0.0), -3.0);
        config.direction = Some(0.0);
        let result = straight_foodwalk(&nothing, &scanner(), &mut uniform(1), &config);
        assert!(matches!(result, Err(SearchError::PathTooShort { .. })));
    }

    #[test]
    fn levy_walk_respects_length_cap() {
        let config = LevyWalkConfig::new(Point::new(0.0, 0.0), 100.0);
        let outcome =
            levy_foodwalk(&nothing, &scanner(), &mut levy_provider(5), &config).unwrap();
        assert!(outcome.found.is_none());
        assert!((outcome.path_until_found.total_length() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn levy_walk_first_direction_override() {
        let mut config = LevyWalkConfig::new(Point::new(0.0, 0.0), 50.0);
        config.first_direction = Some(0.0);

        let outcome =
            levy_foodwalk(&nothing, &scanner(), &mut levy_provider(5), &config).unwrap();
        let stops = &outcome.path_until_found.stops;
        // First step heads due east.
        assert_eq!(stops[1].y, 0.0);
        assert!(stops[1].x > 0.0);
    }

    #[test]
    fn levy_walk_labels_every_stop() {
        let mut config = LevyWalkConfig::new(Point::new(0.0, 0.0), 20.0);
        config.label = Some("levy".into());

        let outcome =
            levy_foodwalk(&nothing, &scanner(), &mut levy_provider(2), &config).unwrap();
        let stops = &outcome.path_until_found.stops;
        assert!(stops[0].label.is_none());
        assert!(stops[1..].iter().all(|s| s.label.as_deref() == Some("levy")));
    }

    #[test]
    fn state_advance_matches_walk_draws() {
        let config = LevyWalkConfig::new(Point::new(0.0, 0.0), 75.0);

        let mut walked = levy_provider(13);
        let outcome = levy_foodwalk(&nothing, &scanner(), &mut walked, &config).unwrap();

        let mut advanced = levy_provider(13);
        let steps = levy_walk_state_advance(&mut advanced, &config);

        assert_eq!(outcome.path_until_found.len(), steps + 1);
        // Both providers are now in identical states.
        assert_eq!(walked.next_angle(), advanced.next_angle());
        assert_eq!(walked.next_length(), advanced.next_length());
    }
}

#[cfg(test)]
mod batch {
    use forage_core::{Point, PowerLawProvider};

    use super::nothing;
    use crate::{BatchConfig, LevyWalkConfig, SegmentScanner, run_levy_batch};

    #[test]
    fn batches_are_deterministic_and_independent() {
        let scanner = SegmentScanner::new(0.5).unwrap();
        let config = LevyWalkConfig::new(Point::new(0.0, 0.0), 30.0);
        let batch = BatchConfig { master_seed: 99, walks: 4 };
        let make = |seed: u64| PowerLawProvider::seeded(seed, 1.0, 2.0).unwrap();

        let first = run_levy_batch(&nothing, &scanner, &batch, make, &config).unwrap();
        let second = run_levy_batch(&nothing, &scanner, &batch, make, &config).unwrap();

        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
        // Different mixed seeds walk different paths.
        assert_ne!(first[0].path_until_found, first[1].path_until_found);
    }
}

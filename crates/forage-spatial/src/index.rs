//! R-tree index of foodspots with a fixed perception radius.
//!
//! # Spatial index
//!
//! Foodspots are points in an R-tree (via `rstar`); a perception query is
//! `locate_within_distance(point, radius²)`, so each detector probe costs
//! O(log n) regardless of how many spots the world holds.  An `FxHashMap`
//! side table maps each `FoodspotId` back to its position — integer-keyed
//! lookups on the result path, same rationale as using FxHash for any hot
//! id-keyed map.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use forage_core::{FoodspotId, Point};

use crate::{Detector, SpatialError, SpatialResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D point with its `FoodspotId`.
#[derive(Clone)]
struct SpotEntry {
    point: [f64; 2],
    id: FoodspotId,
}

impl RTreeObject for SpotEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SpotEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── FoodspotIndex ─────────────────────────────────────────────────────────────

/// A set of point foodspots queryable by perception radius.
///
/// Immutable while a walk is in progress — [`Detector::look`] takes `&self`
/// and the index holds no interior mutability, so detection is a pure
/// function of coordinates as the scan layer requires.
pub struct FoodspotIndex {
    tree:      RTree<SpotEntry>,
    positions: FxHashMap<FoodspotId, Point>,
    radius_2:  f64,
    next_id:   u32,
}

impl FoodspotIndex {
    /// Create an empty index; a spot is perceptible from any coordinate
    /// within `perception_radius` of it.
    pub fn new(perception_radius: f64) -> SpatialResult<Self> {
        if !(perception_radius > 0.0) || !perception_radius.is_finite() {
            return Err(SpatialError::NonPositiveRadius(perception_radius));
        }
        Ok(Self {
            tree:      RTree::new(),
            positions: FxHashMap::default(),
            radius_2:  perception_radius * perception_radius,
            next_id:   0,
        })
    }

    /// Add a foodspot and return its handle.  Ids are assigned
    /// sequentially in insertion order.
    pub fn insert(&mut self, x: f64, y: f64) -> FoodspotId {
        let id = FoodspotId(self.next_id);
        self.next_id += 1;
        self.tree.insert(SpotEntry { point: [x, y], id });
        self.positions.insert(id, Point::new(x, y));
        id
    }

    /// Bulk construction from `(x, y)` pairs.
    pub fn from_points(
        perception_radius: f64,
        points: impl IntoIterator<Item = (f64, f64)>,
    ) -> SpatialResult<Self> {
        let mut index = Self::new(perception_radius)?;
        for (x, y) in points {
            index.insert(x, y);
        }
        Ok(index)
    }

    /// Position of a previously inserted foodspot.
    pub fn position(&self, id: FoodspotId) -> Option<Point> {
        self.positions.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Detector for FoodspotIndex {
    fn look(&self, x: f64, y: f64) -> Option<Vec<FoodspotId>> {
        let mut ids: Vec<FoodspotId> = self
            .tree
            .locate_within_distance([x, y], self.radius_2)
            .map(|entry| entry.id)
            .collect();
        if ids.is_empty() {
            return None;
        }
        // R-tree iteration order is unspecified; sort for deterministic output.
        ids.sort_unstable();
        Some(ids)
    }
}

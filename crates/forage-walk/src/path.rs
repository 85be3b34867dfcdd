//! Absolute coordinates visited by a walk.

use forage_core::Point;

/// One absolute coordinate on a walk, in traversal order within a [`Path`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub x: f64,
    pub y: f64,
    /// Carried over from the step vector that produced this stop, if any.
    pub label: Option<String>,
}

impl Stop {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    #[inline]
    pub fn at(point: Point) -> Self {
        Self { x: point.x, y: point.y, label: None }
    }

    #[inline]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// An ordered sequence of stops; insertion order is traversal order.
///
/// Invariant: a path holds at least one stop, and for paths built by
/// [`accumulate`][crate::accumulate] the distance between adjacent stops
/// equals the length of the step vector that produced the later stop
/// (within floating tolerance).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub stops: Vec<Stop>,
}

impl Path {
    pub fn new(stops: Vec<Stop>) -> Self {
        Self { stops }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Sum of Euclidean distances between adjacent stops.
    pub fn total_length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    /// Iterator over adjacent stop pairs as coordinate points, in
    /// traversal order.  Empty for paths of fewer than 2 stops.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.stops.windows(2).map(|w| (w[0].point(), w[1].point()))
    }

    pub fn first(&self) -> Option<&Stop> {
        self.stops.first()
    }

    pub fn last(&self) -> Option<&Stop> {
        self.stops.last()
    }
}

//! The `Detector` trait — "what can be perceived from here?".

use forage_core::FoodspotId;

/// Answers whether any targets are perceptible from a coordinate.
///
/// A detector is a pure function of position: it holds no mutable state
/// and must answer identically for identical coordinates throughout a
/// walk.  `None` means nothing is perceptible; `Some` carries a
/// **non-empty** collection of target handles.
///
/// # Thread safety
///
/// Batch runners probe one detector from many walks concurrently, so
/// implementations shared across runs must be `Sync`; the trait itself
/// leaves that to the call sites that need it.
pub trait Detector {
    /// Targets perceptible from `(x, y)`, or `None`.
    fn look(&self, x: f64, y: f64) -> Option<Vec<FoodspotId>>;
}

/// Any pure closure works as a detector — convenient for tests and for
/// callers with their own spatial structure.
impl<F> Detector for F
where
    F: Fn(f64, f64) -> Option<Vec<FoodspotId>>,
{
    #[inline]
    fn look(&self, x: f64, y: f64) -> Option<Vec<FoodspotId>> {
        self(x, y)
    }
}

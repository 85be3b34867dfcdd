//! One step of a walk, in polar form.

/// A relative displacement: a direction in radians and a non-negative
/// length.  The optional label records which sub-strategy produced the
/// step and is carried through to the [`Stop`][crate::Stop] it creates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepVector {
    /// Direction in radians, `[0, 2π)`.
    pub direction: f64,
    /// Length of the displacement, `>= 0`.
    pub length: f64,
    /// Provenance tag, e.g. the name of the generating strategy.
    pub label: Option<String>,
}

impl StepVector {
    #[inline]
    pub fn new(direction: f64, length: f64) -> Self {
        Self { direction, length, label: None }
    }

    pub fn labeled(direction: f64, length: f64, label: impl Into<String>) -> Self {
        Self { direction, length, label: Some(label.into()) }
    }

    /// Cartesian decomposition: the vector `(length, 0)` rotated by
    /// `direction`.
    #[inline]
    pub fn displacement(&self) -> (f64, f64) {
        let p = forage_core::Point::new(self.length, 0.0).rotate(self.direction);
        (p.x, p.y)
    }
}

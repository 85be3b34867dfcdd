//! Turning relative step vectors into absolute stops.

use crate::{Path, Stop, StepVector};

/// Realize a finite step sequence as a [`Path`] starting at `start`.
///
/// Each step's polar form is decomposed into a Cartesian displacement
/// (the vector `(length, 0)` rotated by `direction`) and added to the
/// previous stop's coordinates.  Step labels transfer to the stops they
/// produce.  The result always holds at least the start stop.
pub fn accumulate(start: Stop, steps: &[StepVector]) -> Path {
    let mut stops = Vec::with_capacity(steps.len() + 1);
    let (mut x, mut y) = (start.x, start.y);
    stops.push(start);

    for step in steps {
        let (dx, dy) = step.displacement();
        x += dx;
        y += dy;
        stops.push(Stop { x, y, label: step.label.clone() });
    }

    Path::new(stops)
}

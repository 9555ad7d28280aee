//! Builds the text overlays shown next to the arm: the end-effector
//! readout and the per-link rotation matrices.

use crate::kinematic_traits::{Joints, Point};
use nalgebra::Matrix2;

/// Pixels per logical unit for the end-point readout.
pub const PIXELS_PER_UNIT: f64 = 10.0;

/// Formats the end-effector readout: position converted to logical units
/// relative to `origin` (y flipped back to up-positive), followed by the raw
/// joint angles. Unit coordinates are truncated toward zero, not rounded,
/// so 22.97 units reads as "22".
pub fn endpoint_label(effector: &Point, origin: &Point, joints: &Joints) -> String {
    let units_x = (effector.x - origin.x) / PIXELS_PER_UNIT;
    let units_y = (origin.y - effector.y) / PIXELS_PER_UNIT;
    format!(
        "End Point: ({}, {})\nAngles: {:.2}, {:.2}, {:.2} rad",
        units_x as i64, units_y as i64,
        joints[0], joints[1], joints[2]
    )
}

/// Formats a rotation matrix for display, entries to two decimal places in
/// row-major order.
pub fn rotation_matrix_label(matrix: &Matrix2<f64>) -> String {
    format!(
        "Rotation Matrix:\n[{:.2}, {:.2}]\n[{:.2}, {:.2}]",
        matrix[(0, 0)], matrix[(0, 1)],
        matrix[(1, 0)], matrix[(1, 1)]
    )
}

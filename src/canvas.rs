//! The seam between the kinematics and the render surface.
//!
//! The visualization window (or a test double) implements [`Canvas`];
//! [`update_arm`] is the whole redraw pipeline: erase the previous
//! segments, draw the chain for the current angles, refresh the four text
//! overlays and raise them above the freshly drawn lines.

use crate::annotations::{endpoint_label, rotation_matrix_label};
use crate::kinematic_traits::{Joints, Kinematics, Point, Segment};
use crate::kinematics_impl::{cumulative_angles, rotation_matrix};

/// Label slot of the end-effector readout.
pub const L_ENDPOINT: usize = 0;
/// Label slots of the three rotation matrices, in chain order.
pub const L_MATRIX_1: usize = 1;
pub const L_MATRIX_2: usize = 2;
pub const L_MATRIX_3: usize = 3;
/// Total number of label slots a canvas must provide.
pub const LABEL_SLOTS: usize = 4;

/// Draw primitives the arm display needs from a render surface. Handles
/// returned by [`Canvas::draw_segment`] identify what to erase on the next
/// update; labels live in fixed slots and are updated in place.
pub trait Canvas {
    type Handle: Copy;

    /// Draws a line with an arrowhead at its end, returning the handle
    /// that later erases it.
    fn draw_segment(&mut self, segment: &Segment) -> Self::Handle;

    /// Removes a previously drawn segment.
    fn erase(&mut self, handle: Self::Handle);

    /// Replaces the text of the given label slot (see [`L_ENDPOINT`] and
    /// friends).
    fn set_label(&mut self, slot: usize, text: &str);

    /// Moves all label slots above everything drawn so far. Called after
    /// every redraw as new segments would otherwise occlude the text.
    fn raise_labels(&mut self);
}

/// Recomputes the chain for `joints` and redraws it on `canvas`, erasing
/// the segments drawn by the previous call. `previous` is `None` on the
/// very first draw, when there is nothing to erase yet. Returns the handles
/// to pass back in on the next update.
pub fn update_arm<C: Canvas>(
    canvas: &mut C,
    kinematics: &impl Kinematics,
    origin: &Point,
    joints: &Joints,
    previous: Option<[C::Handle; 3]>,
) -> [C::Handle; 3] {
    for handle in previous.into_iter().flatten() {
        canvas.erase(handle);
    }

    let chain = kinematics.forward(joints, origin);
    let handles = chain.segments.map(|segment| canvas.draw_segment(&segment));

    canvas.set_label(L_ENDPOINT, &endpoint_label(&chain.effector(), origin, joints));
    for (slot, angle) in cumulative_angles(joints).iter().enumerate() {
        canvas.set_label(
            L_MATRIX_1 + slot,
            &rotation_matrix_label(&rotation_matrix(*angle)),
        );
    }

    canvas.raise_labels();
    handles
}

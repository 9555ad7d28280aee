//! Defines the common types and the `Kinematics` trait shared by the crate.

use nalgebra::Point2;

/// Joint angles of the arm in radians, base joint first. Any real value is
/// accepted; the sliders of the visualization window clamp to [-PI, PI] but
/// the kinematics itself does not.
pub type Joints = [f64; 3];

/// The arm pointing straight to the right (all joints at zero).
pub const JOINTS_AT_ZERO: Joints = [0.0; 3];

/// A point on the render surface, in pixels. The origin is wherever the
/// caller places it (the canvas center in the visualization window) and y
/// grows downward, as on the screen.
pub type Point = Point2<f64>;

/// Fixed display color of a link, assigned by position in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkColor {
    Red,
    Blue,
    Green,
}

/// One rendered link: a line from `start` to `end` with an arrowhead at
/// `end`, drawn in the given color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub color: LinkColor,
}

impl Segment {
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// The three links of the arm in chain order: each segment starts where the
/// previous one ends, the first starts at the origin. Recomputed in full on
/// every update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentChain {
    pub segments: [Segment; 3],
}

impl SegmentChain {
    /// Position of the end effector (the tip of the last link).
    pub fn effector(&self) -> Point {
        self.segments[2].end
    }
}

pub trait Kinematics {
    /// Computes the positions of all links for the given joint angles,
    /// with the first link anchored at `origin`. Total over all real
    /// angle values.
    fn forward(&self, joints: &Joints, origin: &Point) -> SegmentChain;
}

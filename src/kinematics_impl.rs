use crate::kinematic_traits::{Joints, Kinematics, LinkColor, Point, Segment, SegmentChain};
use crate::parameters::planar_kinematics::Parameters;
use nalgebra::{Matrix2, Vector2};

/// Forward kinematics of the planar 3 DOF arm.
#[derive(Debug, Clone, Copy)]
pub struct PlanarKinematics {
    parameters: Parameters,
}

impl PlanarKinematics {
    /// Creates a new `PlanarKinematics` instance with the given parameters.
    pub fn new(parameters: Parameters) -> Self {
        PlanarKinematics { parameters }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}

/// Absolute orientation of each link: joint i contributes its own angle plus
/// the angles of all joints before it.
pub fn cumulative_angles(joints: &Joints) -> [f64; 3] {
    [
        joints[0],
        joints[0] + joints[1],
        joints[0] + joints[1] + joints[2],
    ]
}

/// The standard 2D rotation matrix for the given angle,
/// [[cos, -sin], [sin, cos]]. Built by hand rather than through
/// `Rotation2` so the `-sin` entry keeps its IEEE sign: `-0.0` at zero
/// angle, displayed as "-0.00".
pub fn rotation_matrix(angle: f64) -> Matrix2<f64> {
    let (s, c) = angle.sin_cos();
    Matrix2::new(c, -s, s, c)
}

// One link as a displacement in screen coordinates. The angle convention is
// mathematical (counterclockwise positive) while screen y grows downward,
// hence the negated sin.
fn link_end(start: &Point, length: f64, angle: f64) -> Point {
    start + Vector2::new(length * angle.cos(), -length * angle.sin())
}

impl Kinematics for PlanarKinematics {
    fn forward(&self, joints: &Joints, origin: &Point) -> SegmentChain {
        let p = &self.parameters;
        let [q1, q12, q123] = cumulative_angles(joints);

        let end1 = link_end(origin, p.l1, q1);
        let end2 = link_end(&end1, p.l2, q12);
        let end3 = link_end(&end2, p.l3, q123);

        SegmentChain {
            segments: [
                Segment { start: *origin, end: end1, color: LinkColor::Red },
                Segment { start: end1, end: end2, color: LinkColor::Blue },
                Segment { start: end2, end: end3, color: LinkColor::Green },
            ],
        }
    }
}

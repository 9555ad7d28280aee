use nalgebra::Point2;
use rs_planar_kinematics::annotations::{endpoint_label, rotation_matrix_label};
use rs_planar_kinematics::kinematic_traits::{Joints, Kinematics};
use rs_planar_kinematics::kinematics_impl::{cumulative_angles, rotation_matrix, PlanarKinematics};
use rs_planar_kinematics::parameters::planar_kinematics::Parameters;
use rs_planar_kinematics::utils::dump_joints;

/// Usage example.
fn main() {
    let arm = PlanarKinematics::new(Parameters::default_arm());
    let origin = Point2::new(0.0, 0.0);

    let joints: Joints = [0.4, -0.3, 0.9]; // Joints are alias of [f64; 3]
    println!("Joint angles:");
    dump_joints(&joints);

    let chain = arm.forward(&joints, &origin);
    for (i, segment) in chain.segments.iter().enumerate() {
        println!(
            "Link {}: ({:7.2}, {:7.2}) -> ({:7.2}, {:7.2})",
            i + 1,
            segment.start.x, segment.start.y,
            segment.end.x, segment.end.y
        );
    }
    println!("{}", endpoint_label(&chain.effector(), &origin, &joints));

    for angle in cumulative_angles(&joints) {
        println!("{}", rotation_matrix_label(&rotation_matrix(angle)));
    }

    #[cfg(feature = "visualization")]
    {
        use rs_planar_kinematics::kinematic_traits::JOINTS_AT_ZERO;

        // Opens the interactive window; drag the sliders to move the arm.
        rs_planar_kinematics::visualization::visualize_arm(
            arm,
            JOINTS_AT_ZERO.map(|angle| angle as f32),
        );
    }
}

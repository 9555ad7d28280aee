//! Helper functions

use crate::kinematic_traits::Joints;

/// Print joint values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_joints(joints: &Joints) {
    let mut row_str = String::new();
    for joint_idx in 0..3 {
        let computed = joints[joint_idx];
        row_str.push_str(&format!("{:5.2} ", computed.to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

/// Allows to specify joint values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: [i32; 3]) -> Joints {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// Convert slider values (f32, as GUI toolkits report them) to joints.
pub fn joints(angles: &[f32; 3]) -> Joints {
    std::array::from_fn(|i| angles[i] as f64)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;

    #[test]
    fn test_as_radians() {
        let joints = as_radians([180, 90, -90]);
        assert!((joints[0] - PI).abs() < 1e-12);
        assert!((joints[1] - PI / 2.0).abs() < 1e-12);
        assert!((joints[2] + PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_joints_from_slider_values() {
        let joints = joints(&[0.5, -0.25, 0.0]);
        assert_eq!(joints, [0.5f32 as f64, -0.25, 0.0]);
    }
}

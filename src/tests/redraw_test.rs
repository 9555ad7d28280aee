use std::f64::consts::PI;

use crate::annotations::endpoint_label;
use crate::canvas::{update_arm, L_ENDPOINT, L_MATRIX_1, L_MATRIX_2, L_MATRIX_3};
use crate::kinematic_traits::{Joints, Kinematics, Point};
use crate::kinematics_impl::PlanarKinematics;
use crate::parameters::planar_kinematics::Parameters;
use crate::tests::test_utils::RecordingCanvas;

fn default_arm() -> PlanarKinematics {
    PlanarKinematics::new(Parameters::default_arm())
}

#[test]
fn test_first_draw_has_nothing_to_erase() {
    let mut canvas = RecordingCanvas::new();
    let origin = Point::new(0.0, 0.0);

    let handles = update_arm(&mut canvas, &default_arm(), &origin, &[0.0, 0.0, 0.0], None);

    assert!(canvas.erased.is_empty());
    assert_eq!(canvas.alive.len(), 3);
    assert_eq!(canvas.alive_handles(), handles.to_vec());
}

#[test]
fn test_update_erases_previous_chain() {
    let mut canvas = RecordingCanvas::new();
    let arm = default_arm();
    let origin = Point::new(0.0, 0.0);

    let first = update_arm(&mut canvas, &arm, &origin, &[0.0, 0.0, 0.0], None);
    let second = update_arm(&mut canvas, &arm, &origin, &[0.5, -0.3, 0.1], Some(first));

    // Exactly the three new segments remain, nothing of the old chain
    assert_eq!(canvas.alive.len(), 3);
    assert_eq!(canvas.alive_handles(), second.to_vec());
    for handle in first {
        assert!(canvas.erased.contains(&handle));
        assert!(!canvas.alive_handles().contains(&handle));
    }
}

#[test]
fn test_drawn_segments_match_forward_kinematics() {
    let mut canvas = RecordingCanvas::new();
    let arm = default_arm();
    let origin = Point::new(300.0, 200.0);
    let joints: Joints = [PI / 2.0, 0.0, 0.0];

    update_arm(&mut canvas, &arm, &origin, &joints, None);

    let chain = arm.forward(&joints, &origin);
    for ((_, drawn), expected) in canvas.alive.iter().zip(chain.segments) {
        assert_eq!(*drawn, expected);
    }
}

#[test]
fn test_labels_after_redraw() {
    let mut canvas = RecordingCanvas::new();
    let arm = default_arm();
    let origin = Point::new(0.0, 0.0);
    let joints: Joints = [0.0, 0.0, 0.0];

    update_arm(&mut canvas, &arm, &origin, &joints, None);

    let chain = arm.forward(&joints, &origin);
    assert_eq!(
        canvas.labels[L_ENDPOINT],
        endpoint_label(&chain.effector(), &origin, &joints)
    );
    assert_eq!(
        canvas.labels[L_MATRIX_1],
        "Rotation Matrix:\n[1.00, -0.00]\n[0.00, 1.00]"
    );
    // All joints at zero, the three cumulative matrices agree
    assert_eq!(canvas.labels[L_MATRIX_1], canvas.labels[L_MATRIX_2]);
    assert_eq!(canvas.labels[L_MATRIX_2], canvas.labels[L_MATRIX_3]);

    // Text goes back on top after the segments were drawn
    assert!(canvas.labels_on_top);
}

#[test]
fn test_matrix_labels_follow_cumulative_angles() {
    let mut canvas = RecordingCanvas::new();
    let origin = Point::new(0.0, 0.0);

    // q2 cancels q1, so the second matrix is the identity again
    update_arm(&mut canvas, &default_arm(), &origin, &[0.4, -0.4, 0.4], None);

    assert_ne!(canvas.labels[L_MATRIX_1], canvas.labels[L_MATRIX_2]);
    assert_eq!(canvas.labels[L_MATRIX_1], canvas.labels[L_MATRIX_3]);
}

#[test]
fn test_redraw_is_idempotent_for_identical_angles() {
    let origin = Point::new(0.0, 0.0);
    let arm = default_arm();
    let joints: Joints = [0.7, -0.2, 1.1];

    let mut once = RecordingCanvas::new();
    update_arm(&mut once, &arm, &origin, &joints, None);

    let mut twice = RecordingCanvas::new();
    let first = update_arm(&mut twice, &arm, &origin, &joints, None);
    update_arm(&mut twice, &arm, &origin, &joints, Some(first));

    assert_eq!(once.labels, twice.labels);
    let once_segments: Vec<_> = once.alive.iter().map(|(_, s)| *s).collect();
    let twice_segments: Vec<_> = twice.alive.iter().map(|(_, s)| *s).collect();
    assert_eq!(once_segments, twice_segments);
}

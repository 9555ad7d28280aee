//! Forward kinematics and interactive visualization for a planar robotic
//! arm with three revolute joints.
//!
//! The arm is a chain of three links (100, 100 and 20 pixels in the default
//! configuration). Each joint angle is measured relative to the previous
//! link, so the absolute orientation of link _i_ is the sum of the first
//! _i_ joint angles. Forward kinematics maps the three angles to the chain
//! of segment endpoints on a screen-oriented plane (y grows downward,
//! angles are counterclockwise-positive).
//!
//! # Features
//!
//! - Forward kinematics total over all real angle values; each link keeps
//!   its exact length for any configuration.
//! - Per-link 2x2 rotation matrices for the cumulative angles, shown next
//!   to the arm for didactic purposes.
//! - Display text for the end effector: position in logical units
//!   (10 pixels per unit, truncated toward zero) plus the raw angles.
//! - A [`canvas::Canvas`] seam so the redraw pipeline is independent of the
//!   GUI toolkit and testable against a recording double.
//! - An interactive window (feature `visualization`, on by default) with
//!   one slider per joint, rendered with Bevy and egui.
//!
//! ## Example
//!
//! ```
//! use nalgebra::Point2;
//! use rs_planar_kinematics::kinematic_traits::{Joints, Kinematics};
//! use rs_planar_kinematics::kinematics_impl::PlanarKinematics;
//! use rs_planar_kinematics::parameters::planar_kinematics::Parameters;
//!
//! let arm = PlanarKinematics::new(Parameters::default_arm());
//! let joints: Joints = [0.0, 0.0, 0.0];
//! let chain = arm.forward(&joints, &Point2::new(0.0, 0.0));
//! assert_eq!(chain.effector(), Point2::new(220.0, 0.0));
//! ```

pub mod parameters;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_impl;

pub mod annotations;

pub mod canvas;

#[path = "visualize/visualization.rs"]
#[cfg(feature = "visualization")]
pub mod visualization;

#[cfg(test)]
mod tests;

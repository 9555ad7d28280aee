//! Provides the interactive window: three sliders for the joint angles and
//! a 2D canvas showing the arm over a coordinate plane.
//!
//! Each slider motion recomputes the full chain through
//! [`crate::canvas::update_arm`]; the previously drawn segments are erased
//! by handle and fresh ones spawned, while the four text overlays (end
//! effector readout and the three rotation matrices) are updated in place.
//!
//! ```no_run
//! use rs_planar_kinematics::kinematics_impl::PlanarKinematics;
//! use rs_planar_kinematics::parameters::planar_kinematics::Parameters;
//! use rs_planar_kinematics::visualization;
//!
//! let arm = PlanarKinematics::new(Parameters::default_arm());
//!
//! // Opens the window, arm initially stretched to the right
//! visualization::visualize_arm(arm, [0.0; 3]);
//! ```

use bevy::prelude::*;
use bevy::sprite::{Anchor, MaterialMesh2dBundle, Mesh2dHandle};
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::canvas::{self, Canvas, LABEL_SLOTS, L_ENDPOINT, L_MATRIX_1, L_MATRIX_2, L_MATRIX_3};
use crate::kinematic_traits::{LinkColor, Point, Segment};
use crate::kinematics_impl::PlanarKinematics;
use crate::utils;

const CANVAS_WIDTH: f32 = 600.0;
const CANVAS_HEIGHT: f32 = 400.0;
const GRID_STEP: f32 = 10.0;

const LINE_WIDTH: f32 = 2.0;
const ARROW_LENGTH: f32 = 10.0;
const ARROW_WIDTH: f32 = 7.0;
const LABEL_FONT_SIZE: f32 = 13.0;

// Stacking order: grid below axes, axes below segments, labels on top.
const Z_GRID: f32 = 0.0;
const Z_AXES: f32 = 0.1;
const Z_SEGMENTS: f32 = 1.0;
const Z_LABELS: f32 = 2.0;

// Where the label slots sit, in Bevy world coordinates (canvas center at
// the origin). The endpoint readout is anchored top left, the matrices
// top right.
const LABEL_POSITIONS: [(f32, f32); LABEL_SLOTS] = [
    (-CANVAS_WIDTH / 2.0 + 10.0, CANVAS_HEIGHT / 2.0 - 10.0),
    (CANVAS_WIDTH / 2.0 - 10.0, CANVAS_HEIGHT / 2.0 - 20.0),
    (CANVAS_WIDTH / 2.0 - 10.0, CANVAS_HEIGHT / 2.0 - 70.0),
    (CANVAS_WIDTH / 2.0 - 10.0, CANVAS_HEIGHT / 2.0 - 120.0),
];

/// Data to store the current joint angles as they are shown in the control panel
#[derive(Resource)]
struct ArmControls {
    joint_angles: [f32; 3],
    previous_joint_angles: [f32; 3], // Store previous joint angles here
}

// Resource to store the arm and what is currently drawn for it
#[derive(Resource)]
struct Arm {
    kinematics: PlanarKinematics,
    segment_handles: Option<[Entity; 3]>, // Erased on the next redraw
    labels: Option<[Entity; LABEL_SLOTS]>,
}

/// The kinematics works in screen coordinates (y down); the anchor of the
/// arm is the canvas center, which is the origin of the Bevy world.
fn canvas_origin() -> Point {
    Point::new(0.0, 0.0)
}

fn to_bevy(point: &Point) -> Vec2 {
    Vec2::new(point.x as f32, -point.y as f32)
}

fn link_color(color: LinkColor) -> Color {
    match color {
        LinkColor::Red => Color::srgb(1.0, 0.0, 0.0),
        LinkColor::Blue => Color::srgb(0.0, 0.0, 1.0),
        LinkColor::Green => Color::srgb(0.0, 0.5, 0.0),
    }
}

fn label_style() -> TextStyle {
    TextStyle {
        font_size: LABEL_FONT_SIZE,
        color: Color::BLACK,
        ..default()
    }
}

/// Render surface backed by Bevy entities. A drawn segment is a sprite for
/// the line with the arrowhead mesh as its child, so one `Entity` handle
/// erases both.
struct BevyCanvas<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    meshes: &'a mut Assets<Mesh>,
    materials: &'a mut Assets<ColorMaterial>,
    labels: [Entity; LABEL_SLOTS],
}

impl Canvas for BevyCanvas<'_, '_, '_> {
    type Handle = Entity;

    fn draw_segment(&mut self, segment: &Segment) -> Entity {
        let a = to_bevy(&segment.start);
        let b = to_bevy(&segment.end);
        let direction = b - a;
        let length = direction.length();
        let color = link_color(segment.color);

        let line = self
            .commands
            .spawn(SpriteBundle {
                sprite: Sprite {
                    color,
                    custom_size: Some(Vec2::new(length, LINE_WIDTH)),
                    ..default()
                },
                transform: Transform {
                    translation: ((a + b) / 2.0).extend(Z_SEGMENTS),
                    rotation: Quat::from_rotation_z(direction.y.atan2(direction.x)),
                    ..default()
                },
                ..default()
            })
            .id();

        // Arrowhead at the terminal end, pointing along the link
        let arrow = self
            .commands
            .spawn(MaterialMesh2dBundle {
                mesh: Mesh2dHandle(self.meshes.add(Triangle2d::new(
                    Vec2::new(length / 2.0, 0.0),
                    Vec2::new(length / 2.0 - ARROW_LENGTH, ARROW_WIDTH / 2.0),
                    Vec2::new(length / 2.0 - ARROW_LENGTH, -ARROW_WIDTH / 2.0),
                ))),
                material: self.materials.add(color),
                transform: Transform::from_xyz(0.0, 0.0, 0.01),
                ..default()
            })
            .id();
        self.commands.entity(line).add_child(arrow);

        line
    }

    fn erase(&mut self, handle: Entity) {
        self.commands.entity(handle).despawn_recursive();
    }

    fn set_label(&mut self, slot: usize, text: &str) {
        self.commands
            .entity(self.labels[slot])
            .insert(Text::from_section(text, label_style()));
    }

    fn raise_labels(&mut self) {
        for (slot, entity) in self.labels.iter().enumerate() {
            let (x, y) = LABEL_POSITIONS[slot];
            self.commands
                .entity(*entity)
                .insert(Transform::from_xyz(x, y, Z_LABELS));
        }
    }
}

/// Visualize the given arm, starting from the given initial angles (in
/// radians). Bevy will be used for visualization.
pub fn visualize_arm(kinematics: PlanarKinematics, initial_angles: [f32; 3]) {
    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "3DOF Robotic Arm Simulation".to_string(),
                    resolution: (CANVAS_WIDTH, CANVAS_HEIGHT).into(),
                    ..default()
                }),
                ..default()
            }),
            EguiPlugin,
        ))
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(ArmControls {
            joint_angles: initial_angles,
            previous_joint_angles: initial_angles,
        })
        .insert_resource(Arm {
            kinematics,
            segment_handles: None,
            labels: None,
        })
        .add_systems(Startup, setup)
        .add_systems(Update, (update_arm_display, control_panel))
        .run();
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    controls: Res<ArmControls>,
    mut arm: ResMut<Arm>,
) {
    commands.spawn(Camera2dBundle::default());

    spawn_coordinate_plane(&mut commands);

    let labels = [
        spawn_label(&mut commands, LABEL_POSITIONS[L_ENDPOINT], Anchor::TopLeft),
        spawn_label(&mut commands, LABEL_POSITIONS[L_MATRIX_1], Anchor::TopRight),
        spawn_label(&mut commands, LABEL_POSITIONS[L_MATRIX_2], Anchor::TopRight),
        spawn_label(&mut commands, LABEL_POSITIONS[L_MATRIX_3], Anchor::TopRight),
    ];

    // Draw the arm at the initial angles, before any slider motion
    let arm = &mut *arm;
    arm.labels = Some(labels);
    let joints = utils::joints(&controls.joint_angles);
    let mut canvas = BevyCanvas {
        commands: &mut commands,
        meshes: &mut meshes,
        materials: &mut materials,
        labels,
    };
    arm.segment_handles = Some(canvas::update_arm(
        &mut canvas,
        &arm.kinematics,
        &canvas_origin(),
        &joints,
        None,
    ));
}

/// The decorative background: a light grid every 10 px with black axes
/// through the canvas center. Drawn once; the z layers keep segments and
/// labels above it on every later redraw.
fn spawn_coordinate_plane(commands: &mut Commands) {
    let grid = Color::srgb(0.867, 0.867, 0.867);

    let mut y = -CANVAS_HEIGHT / 2.0;
    while y <= CANVAS_HEIGHT / 2.0 {
        spawn_rect(commands, Vec2::new(CANVAS_WIDTH, 1.0), Vec3::new(0.0, y, Z_GRID), grid);
        y += GRID_STEP;
    }
    let mut x = -CANVAS_WIDTH / 2.0;
    while x <= CANVAS_WIDTH / 2.0 {
        spawn_rect(commands, Vec2::new(1.0, CANVAS_HEIGHT), Vec3::new(x, 0.0, Z_GRID), grid);
        x += GRID_STEP;
    }

    spawn_rect(commands, Vec2::new(CANVAS_WIDTH, 1.0), Vec3::new(0.0, 0.0, Z_AXES), Color::BLACK);
    spawn_rect(commands, Vec2::new(1.0, CANVAS_HEIGHT), Vec3::new(0.0, 0.0, Z_AXES), Color::BLACK);
}

fn spawn_rect(commands: &mut Commands, size: Vec2, position: Vec3, color: Color) {
    commands.spawn(SpriteBundle {
        sprite: Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        transform: Transform::from_translation(position),
        ..default()
    });
}

fn spawn_label(commands: &mut Commands, position: (f32, f32), anchor: Anchor) -> Entity {
    commands
        .spawn(Text2dBundle {
            text: Text::from_section("", label_style()),
            text_anchor: anchor,
            transform: Transform::from_xyz(position.0, position.1, Z_LABELS),
            ..default()
        })
        .id()
}

// Redraw the arm when the sliders have moved
fn update_arm_display(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut controls: ResMut<ArmControls>,
    mut arm: ResMut<Arm>,
) {
    if controls.joint_angles == controls.previous_joint_angles {
        return;
    }

    let arm = &mut *arm;
    let joints = utils::joints(&controls.joint_angles);
    let mut canvas = BevyCanvas {
        commands: &mut commands,
        meshes: &mut meshes,
        materials: &mut materials,
        labels: arm.labels.unwrap(),
    };
    let previous = arm.segment_handles.take();
    arm.segment_handles = Some(canvas::update_arm(
        &mut canvas,
        &arm.kinematics,
        &canvas_origin(),
        &joints,
        previous,
    ));
    controls.previous_joint_angles = controls.joint_angles;
}

// Control panel with one slider per joint
fn control_panel(mut egui_contexts: EguiContexts, mut controls: ResMut<ArmControls>) {
    use std::f32::consts::PI;

    let names = ["First Line Angle", "Second Line Angle", "Third Line Angle"];
    egui::Window::new("Joint Angles").show(egui_contexts.ctx_mut(), |ui| {
        for (angle, name) in controls.joint_angles.iter_mut().zip(names) {
            ui.add(egui::Slider::new(angle, -PI..=PI).step_by(0.01).text(name));
        }
    });
}

//! Bevy plugin for the side-scroll camera.
//!
//! `SideScrollCameraPlugin` is logic only: it has no rendering or window
//! dependencies and runs under `MinimalPlugins` in tests and headless runs.

use bevy::prelude::*;

use crate::bevy::events::FallDamageEvent;
use crate::bevy::resources::{CameraCommandQueue, CameraSettings};
use crate::bevy::systems;
use crate::config::CameraConfig;
use crate::controller::CAMERA_DT;

/// Plugin wiring the camera controller into the ECS.
///
/// The camera ticks in `FixedUpdate` at [`CAMERA_DT`], so motion is
/// independent of the render frame rate.
#[derive(Default)]
pub struct SideScrollCameraPlugin {
    pub config: CameraConfig,
    pub command_queue: Option<CameraCommandQueue>,
}

impl SideScrollCameraPlugin {
    pub fn new(config: CameraConfig, command_queue: CameraCommandQueue) -> Self {
        Self {
            config,
            command_queue: Some(command_queue),
        }
    }
}

impl Plugin for SideScrollCameraPlugin {
    fn build(&self, app: &mut App) {
        // ====================================================================
        // Resources
        // ====================================================================
        app.insert_resource(Time::<Fixed>::from_seconds(f64::from(CAMERA_DT)));
        app.insert_resource(CameraSettings(self.config.clone()))
            .insert_resource(self.command_queue.clone().unwrap_or_default());

        // ====================================================================
        // Messages
        // ====================================================================
        app.add_message::<FallDamageEvent>();

        // ====================================================================
        // Setup and commands (Update)
        // ====================================================================
        app.add_systems(
            Update,
            (systems::attach_camera_rig, systems::process_camera_commands).chain(),
        );

        // ====================================================================
        // Camera tick and damage (FixedUpdate)
        // ====================================================================
        app.add_systems(
            FixedUpdate,
            (systems::tick_side_scroll_camera, systems::apply_fall_damage).chain(),
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::bevy::test_utils::TestApp;
    use crate::bevy::{CameraCommand, Health, SideScrollCamera};
    use crate::config::{CameraConfig, ChaseConfig, ViewportConfig};
    use crate::mode::{Axis, AxisMode};

    use bevy::prelude::*;

    fn chase_config(speed: f32) -> CameraConfig {
        CameraConfig {
            x_mode: AxisMode::Moving,
            chase: ChaseConfig {
                speed,
                ..ChaseConfig::default()
            },
            viewport: ViewportConfig {
                half_height: 2.5,
                aspect: 2.0,
            },
            ..CameraConfig::default()
        }
    }

    #[test]
    fn test_rig_attaches_once_subject_exists() {
        let mut app = TestApp::new(CameraConfig::default());
        let camera = app.spawn_camera(-3.0);
        app.update();
        assert!(app.world().get::<SideScrollCamera>(camera).is_none());

        let subject = app.spawn_subject(Vec2::new(2.0, 1.0), 100.0);
        app.update();

        let rig = &app.world().get::<SideScrollCamera>(camera).unwrap().rig;
        assert_eq!(app.world().get::<SideScrollCamera>(camera).unwrap().subject, subject);
        assert!((rig.position().x + 3.0).abs() < f32::EPSILON);
        assert!((rig.position().y - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_follow_camera_writes_transform() {
        let config = CameraConfig {
            directional_offset: 0.0,
            ..CameraConfig::default()
        };
        let mut app = TestApp::new(config);
        let camera = app.spawn_camera(0.0);
        let subject = app.spawn_subject(Vec2::new(4.0, 0.0), 100.0);
        app.update();

        app.step(1);
        let translation = app.world().get::<Transform>(camera).unwrap().translation;
        assert!((translation.x - 4.0).abs() < 1e-5);
        assert!((translation.y - 1.5).abs() < 1e-5);

        app.move_subject(subject, Vec2::new(9.0, 0.0));
        app.step(1);
        let translation = app.world().get::<Transform>(camera).unwrap().translation;
        assert!((translation.x - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_chase_scroll_advances_with_fixed_steps() {
        let mut app = TestApp::new(chase_config(5.0));
        let camera = app.spawn_camera(0.0);
        app.spawn_subject(Vec2::new(20.0, 0.0), 100.0);
        app.update();

        app.step(60);

        let translation = app.world().get::<Transform>(camera).unwrap().translation;
        assert!((translation.x - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_fall_damage_reaches_health() {
        let mut app = TestApp::new(chase_config(0.0));
        app.spawn_camera(10.0);
        let subject = app.spawn_subject(Vec2::new(4.0, 0.0), 250.0);
        app.update();

        app.step(1);
        let health = *app.world().get::<Health>(subject).unwrap();
        assert!((health.current - 150.0).abs() < f32::EPSILON);

        app.step(2);
        let health = *app.world().get::<Health>(subject).unwrap();
        assert!(health.is_depleted());
    }

    #[test]
    fn test_commands_wait_for_rig_then_apply() {
        let mut app = TestApp::new(CameraConfig::default());
        app.push_command(CameraCommand::SetMode {
            axis: Axis::X,
            mode: AxisMode::Static,
            transition: false,
        });
        app.push_command(CameraCommand::SetStaticPosition { axis: Axis::X, value: 42.0 });
        app.update();
        assert_eq!(app.command_queue().len(), 2);

        let camera = app.spawn_camera(0.0);
        app.spawn_subject(Vec2::ZERO, 100.0);
        app.update();
        assert!(app.command_queue().is_empty());

        let rig = &app.world().get::<SideScrollCamera>(camera).unwrap().rig;
        assert_eq!(rig.mode(Axis::X), AxisMode::Static);
        assert!((rig.config().static_position[0] - 42.0).abs() < f32::EPSILON);

        app.step(600);
        let translation = app.world().get::<Transform>(camera).unwrap().translation;
        assert!((translation.x - 42.0).abs() < 0.01);
    }
}

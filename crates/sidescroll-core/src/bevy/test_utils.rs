//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `SideScrollCameraPlugin` for testing camera logic
//! without a rendering or windowing backend.

use bevy::prelude::*;

use crate::bevy::components::{CameraSubject, Health, MainCamera};
use crate::bevy::plugin::SideScrollCameraPlugin;
use crate::bevy::resources::{CameraCommand, CameraCommandQueue};
use crate::config::CameraConfig;

/// A headless Bevy app wrapper for testing.
pub(crate) struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Create a new test app with the given camera configuration.
    pub fn new(config: CameraConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SideScrollCameraPlugin {
            config,
            command_queue: None,
        });
        // Only explicit fixed steps advance the camera.
        app.world_mut().resource_mut::<Time<Virtual>>().pause();
        // Run one update to initialize all resources
        app.update();
        Self { app }
    }

    /// Run a single frame update.
    pub fn update(&mut self) {
        self.app.update();
    }

    /// Advance the camera by exactly `n` fixed timesteps.
    ///
    /// Feeds the fixed timestep straight into the `Time<Fixed>` accumulator,
    /// bypassing virtual time.
    pub fn step(&mut self, n: usize) {
        let dt = self.app.world().resource::<Time<Fixed>>().timestep();
        for _ in 0..n {
            self.app
                .world_mut()
                .resource_mut::<Time<Fixed>>()
                .accumulate_overstep(dt);
            self.app.update();
        }
    }

    /// Spawn a main camera at the given X.
    pub fn spawn_camera(&mut self, x: f32) -> Entity {
        self.app
            .world_mut()
            .spawn((MainCamera, Transform::from_xyz(x, 0.0, 0.0)))
            .id()
    }

    /// Spawn the camera subject with the given hit points.
    pub fn spawn_subject(&mut self, position: Vec2, health: f32) -> Entity {
        self.app
            .world_mut()
            .spawn((
                CameraSubject,
                Health::new(health),
                Transform::from_translation(position.extend(0.0)),
            ))
            .id()
    }

    /// Teleport the subject.
    pub fn move_subject(&mut self, subject: Entity, position: Vec2) {
        if let Some(mut transform) = self.app.world_mut().get_mut::<Transform>(subject) {
            transform.translation = position.extend(0.0);
        }
    }

    /// Push a command to the command queue.
    pub fn push_command(&mut self, command: CameraCommand) {
        self.app.world().resource::<CameraCommandQueue>().push(command);
    }

    pub fn command_queue(&self) -> &CameraCommandQueue {
        self.app.world().resource::<CameraCommandQueue>()
    }

    /// Get a reference to the World.
    pub fn world(&self) -> &World {
        self.app.world()
    }
}

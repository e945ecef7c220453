//! Command processing system.
//!
//! Applies commands pushed by external game logic to every side-scroll camera.

use bevy::prelude::*;

use crate::bevy::{CameraCommandQueue, MainCamera, SideScrollCamera};

/// System to process all commands from the camera command queue.
///
/// Commands stay queued until at least one camera has a rig attached,
/// so commands pushed during level setup are not lost.
pub fn process_camera_commands(
    command_queue: Res<CameraCommandQueue>,
    mut cameras: Query<&mut SideScrollCamera, With<MainCamera>>,
) {
    if cameras.is_empty() || command_queue.is_empty() {
        return;
    }

    for command in command_queue.drain() {
        tracing::info!("[command] {:?}", command);
        for mut camera in cameras.iter_mut() {
            command.apply(&mut camera.rig);
        }
    }
}

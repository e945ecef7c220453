//! Bevy integration for the side-scroll camera.
//!
//! This module wires [`CameraMotionController`](crate::CameraMotionController)
//! into the ECS: components for the camera, its subject and its health,
//! a fall-damage message, a command queue for external game logic, and the
//! systems and plugin that tie them together.

pub mod components;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_utils;

pub use components::*;
pub use events::*;
pub use plugin::SideScrollCameraPlugin;
pub use resources::*;
pub use systems::{apply_fall_damage, attach_camera_rig, process_camera_commands, tick_side_scroll_camera};

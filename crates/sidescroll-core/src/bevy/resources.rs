//! ECS Resources for the side-scroll camera.

use std::collections::VecDeque;
use std::sync::Arc;

use bevy::prelude::*;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::{CameraConfig, ViewportConfig};
use crate::mode::{Axis, AxisMode};
use crate::subject::{DamageSink, Subject};
use crate::CameraMotionController;

/// Configuration used when a rig is attached to a new camera.
#[derive(Resource, Debug, Clone, Default)]
pub struct CameraSettings(pub CameraConfig);

/// Commands from external game logic (room transitions, scripted sequences).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CameraCommand {
    /// Set one axis's mode.
    SetMode {
        axis: Axis,
        mode: AxisMode,
        #[serde(default = "default_transition")]
        transition: bool,
    },
    /// Set both axes' modes together.
    SetModes {
        x: AxisMode,
        y: AxisMode,
        #[serde(default = "default_transition")]
        transition: bool,
    },
    /// Set one axis's follow offset.
    SetFollowOffset {
        axis: Axis,
        value: f32,
        #[serde(default = "default_transition")]
        transition: bool,
    },
    /// Set the look-ahead distance and blend rate.
    SetDirectionalOffset { amount: f32, blend_rate: f32 },
    /// Set the moving-mode target position.
    SetMovingTarget { position: [f32; 2] },
    /// Set the chase scroll speed.
    SetChaseSpeed { speed: f32 },
    /// Set one axis's static coordinate.
    SetStaticPosition { axis: Axis, value: f32 },
    /// Set both static coordinates.
    SetStaticPositions { position: [f32; 2] },
    /// Set the mode-transition duration.
    SetTransitionDuration { duration: f32 },
    /// Resize the viewport.
    SetViewport { viewport: ViewportConfig },
    /// Teleport the camera.
    SnapTo { position: [f32; 2] },
}

fn default_transition() -> bool {
    true
}

impl CameraCommand {
    /// Applies this command to a controller.
    pub fn apply<S: Subject, D: DamageSink>(&self, controller: &mut CameraMotionController<S, D>) {
        match *self {
            Self::SetMode {
                axis,
                mode,
                transition,
            } => controller.set_mode(axis, mode, transition),
            Self::SetModes { x, y, transition } => controller.set_modes(x, y, transition),
            Self::SetFollowOffset {
                axis,
                value,
                transition,
            } => controller.set_follow_offset(axis, value, transition),
            Self::SetDirectionalOffset { amount, blend_rate } => {
                controller.set_directional_offset(amount, blend_rate);
            }
            Self::SetMovingTarget { position } => controller.set_moving_target(Vec2::from_array(position)),
            Self::SetChaseSpeed { speed } => controller.set_chase_speed(speed),
            Self::SetStaticPosition { axis, value } => controller.set_static_position(axis, value),
            Self::SetStaticPositions { position } => {
                controller.set_static_positions(Vec2::from_array(position));
            }
            Self::SetTransitionDuration { duration } => controller.set_transition_duration(duration),
            Self::SetViewport { viewport } => controller.set_viewport(viewport),
            Self::SnapTo { position } => controller.snap_to(Vec2::from_array(position)),
        }
    }
}

/// Thread-safe command queue.
///
/// Game logic outside the ECS pushes commands that are applied to every
/// side-scroll camera on the next frame.
#[derive(Resource, Clone)]
pub struct CameraCommandQueue {
    inner: Arc<Mutex<VecDeque<CameraCommand>>>,
}

impl CameraCommandQueue {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Push a command to be processed.
    pub fn push(&self, command: CameraCommand) {
        self.inner.lock().push_back(command);
    }

    /// Drain all pending commands.
    pub fn drain(&self) -> Vec<CameraCommand> {
        self.inner.lock().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }
}

impl Default for CameraCommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::{DamageLedger, SubjectProbe};

    #[test]
    fn test_queue_is_shared_between_clones() {
        let queue = CameraCommandQueue::new();
        let handle = queue.clone();

        handle.push(CameraCommand::SetChaseSpeed { speed: 4.0 });
        handle.push(CameraCommand::SetTransitionDuration { duration: 0.25 });
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained[0], CameraCommand::SetChaseSpeed { speed: 4.0 });
        assert!(handle.is_empty());
    }

    #[test]
    fn test_command_json_defaults_to_transition() {
        let command: CameraCommand =
            serde_json::from_str(r#"{ "type": "set_mode", "axis": "x", "mode": "moving" }"#).unwrap();
        assert_eq!(
            command,
            CameraCommand::SetMode {
                axis: Axis::X,
                mode: AxisMode::Moving,
                transition: true,
            }
        );
    }

    #[test]
    fn test_apply_routes_to_controller() {
        let mut controller = CameraMotionController::new(
            CameraConfig::default(),
            SubjectProbe::default(),
            DamageLedger::default(),
            0.0,
        );

        CameraCommand::SetModes {
            x: AxisMode::Moving,
            y: AxisMode::Static,
            transition: false,
        }
        .apply(&mut controller);
        CameraCommand::SetChaseSpeed { speed: 9.0 }.apply(&mut controller);
        CameraCommand::SetStaticPositions { position: [1.0, 2.0] }.apply(&mut controller);
        CameraCommand::SetFollowOffset {
            axis: Axis::Y,
            value: 3.0,
            transition: false,
        }
        .apply(&mut controller);

        assert!(controller.is_x_moving());
        assert_eq!(controller.mode(Axis::Y), AxisMode::Static);
        assert!((controller.config().chase.speed - 9.0).abs() < f32::EPSILON);
        assert_eq!(controller.config().static_position, [1.0, 2.0]);
        assert!((controller.follow_offset_y() - 3.0).abs() < f32::EPSILON);
    }
}

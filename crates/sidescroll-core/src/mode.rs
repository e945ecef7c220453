//! Per-axis camera modes.

use serde::{Deserialize, Serialize};

use crate::damping::TransitionTimer;

/// A camera axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Component index into a `Vec2`.
    pub fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

/// How an axis derives its target coordinate each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisMode {
    /// Hold a fixed coordinate.
    Static,
    /// Track the subject plus the follow offset.
    #[default]
    Follow,
    /// Evolve autonomously: chase scroll on X, moving target on Y.
    Moving,
}

/// Runtime state of one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisState {
    pub mode: AxisMode,
    /// Smoothing velocity carried by the damped approach.
    pub velocity: f32,
    pub transition: TransitionTimer,
}

impl AxisState {
    pub fn new(mode: AxisMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Switches to `mode`.
    ///
    /// Returns `false` (and changes nothing) when `mode` is already active.
    /// Without `transition` the velocity is zeroed and no window is opened.
    pub fn switch(&mut self, mode: AxisMode, transition: bool) -> bool {
        if self.mode == mode {
            return false;
        }

        self.mode = mode;
        if transition {
            self.transition.start();
        } else {
            self.transition.cancel();
            self.velocity = 0.0;
        }
        true
    }

    /// Drops any in-flight motion: zero velocity, no transition.
    pub fn halt(&mut self) {
        self.velocity = 0.0;
        self.transition.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_same_mode_is_noop() {
        let mut state = AxisState::new(AxisMode::Follow);
        state.velocity = 2.5;

        assert!(!state.switch(AxisMode::Follow, true));
        assert!(!state.transition.is_active());
        assert!((state.velocity - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_switch_with_transition_keeps_velocity() {
        let mut state = AxisState::new(AxisMode::Follow);
        state.velocity = 2.5;

        assert!(state.switch(AxisMode::Static, true));
        assert_eq!(state.mode, AxisMode::Static);
        assert!(state.transition.is_active());
        assert!((state.velocity - 2.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_switch_without_transition_resets_velocity() {
        let mut state = AxisState::new(AxisMode::Static);
        state.velocity = -1.0;
        state.transition.start();

        assert!(state.switch(AxisMode::Moving, false));
        assert!(!state.transition.is_active());
        assert!(state.velocity.abs() < f32::EPSILON);
    }

    #[test]
    fn test_axis_mode_serde_names() {
        let json = serde_json::to_string(&[AxisMode::Static, AxisMode::Follow, AxisMode::Moving]).unwrap();
        assert_eq!(json, r#"["static","follow","moving"]"#);

        let axis: Axis = serde_json::from_str(r#""y""#).unwrap();
        assert_eq!(axis, Axis::Y);
        assert_eq!(axis.index(), 1);
    }
}

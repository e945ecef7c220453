//! Per-axis camera motion controller.
//!
//! Each tick runs, in order:
//! 1. look-ahead (directional offset) blend, X in `Follow` only
//! 2. follow-offset blend, while one is in flight
//! 3. mode-transition timers
//! 4. chase scroll, X in `Moving` only
//! 5. target position from the axis modes
//! 6. final position: transition damping, follow snap, or steady damping

use bevy::math::Vec2;

use crate::chase::ChaseState;
use crate::config::{CameraConfig, ViewportConfig};
use crate::damping::{ExpBlend, smooth_damp};
use crate::mode::{Axis, AxisMode, AxisState};
use crate::subject::{DamageSink, Subject};

/// Fixed simulation step the camera is designed around (60 Hz).
pub const CAMERA_DT: f32 = 1.0 / 60.0;

/// Camera controller owning its subject and damage sink.
#[derive(Debug, Clone)]
pub struct CameraMotionController<S, D> {
    subject: S,
    sink: D,
    config: CameraConfig,
    position: Vec2,
    target: Vec2,
    axes: [AxisState; 2],
    follow_offset: ExpBlend<Vec2>,
    directional: ExpBlend<f32>,
    chase: ChaseState,
}

impl<S: Subject, D: DamageSink> CameraMotionController<S, D> {
    /// Creates a controller for a new level.
    ///
    /// X starts at `initial_x` (wherever the camera already is); Y starts at
    /// the subject's Y plus the configured follow Y offset.
    pub fn new(config: CameraConfig, subject: S, sink: D, initial_x: f32) -> Self {
        let subject_position = subject.position();
        let follow_offset = config.follow_offset();
        let position = Vec2::new(initial_x, subject_position.y + follow_offset.y);

        Self {
            axes: [AxisState::new(config.x_mode), AxisState::new(config.y_mode)],
            follow_offset: ExpBlend::new(follow_offset, config.follow_offset_blend_rate),
            directional: ExpBlend::new(0.0, config.directional_blend_rate),
            chase: ChaseState::new(subject_position.x),
            position,
            target: position,
            subject,
            sink,
            config,
        }
    }

    // ========================================================================
    // Tick
    // ========================================================================

    /// Advances the camera by `dt` seconds and returns the new position.
    pub fn tick(&mut self, dt: f32) -> Vec2 {
        let subject = self.subject.position();
        let epsilon = self.config.offset_epsilon;

        if self.mode(Axis::X) == AxisMode::Follow {
            let facing = if self.subject.facing() < 0.0 { -1.0 } else { 1.0 };
            self.directional.retarget(facing * self.config.directional_offset);
            self.directional.advance(dt, epsilon);
        }

        if self.follow_offset.advance(dt, epsilon) {
            tracing::debug!("[camera] Follow offset settled at {}", self.follow_offset.current());
        }

        let duration = self.config.transition_duration;
        for axis in Axis::ALL {
            if self.axes[axis.index()].transition.advance(dt, duration) {
                tracing::debug!("[camera] {:?} transition finished", axis);
            }
        }

        if self.mode(Axis::X) == AxisMode::Moving {
            self.update_chase(subject.x, dt);
        }

        self.target = self.compute_target(subject);

        if self.mode(Axis::X) != AxisMode::Moving {
            let look_ahead = self.directional.current();
            self.resolve_axis(Axis::X, look_ahead, dt);
        }
        self.resolve_axis(Axis::Y, 0.0, dt);

        self.position
    }

    fn update_chase(&mut self, subject_x: f32, dt: f32) {
        let half_width = self.half_width();
        let was_tracking = self.chase.is_tracking();
        let step = self
            .chase
            .update(self.position.x, subject_x, half_width, &self.config.chase, dt);

        if step.fell_behind {
            tracing::info!(
                "[camera] Subject fell behind (x={:.2}, left edge={:.2}), dealing {} damage",
                subject_x,
                self.position.x - half_width,
                self.config.chase.fall_damage
            );
            self.sink.take_damage(self.config.chase.fall_damage);
        }

        if was_tracking != self.chase.is_tracking() {
            tracing::debug!(
                "[camera] Chase tracking {} at x={:.2}",
                if self.chase.is_tracking() { "engaged" } else { "released" },
                step.camera_x
            );
        }

        // X velocity follows the scroll pace; a tracking snap resets it.
        let engaged = !was_tracking && self.chase.is_tracking();
        self.axes[Axis::X.index()].velocity = if dt > 0.0 && !engaged {
            (step.camera_x - self.position.x) / dt
        } else {
            0.0
        };
        self.position.x = step.camera_x;
    }

    fn compute_target(&self, subject: Vec2) -> Vec2 {
        let offset = self.follow_offset.current();
        let static_position = self.config.static_position();

        let x = match self.mode(Axis::X) {
            AxisMode::Static => static_position.x,
            AxisMode::Follow => subject.x + offset.x,
            AxisMode::Moving => self.target.x,
        };
        let y = match self.mode(Axis::Y) {
            AxisMode::Static => static_position.y,
            AxisMode::Follow => subject.y + offset.y,
            AxisMode::Moving => self.config.moving_target().y,
        };

        Vec2::new(x, y)
    }

    /// Applies the final coordinate for one axis. `bias` is only added while
    /// transitioning or in `Follow`.
    fn resolve_axis(&mut self, axis: Axis, bias: f32, dt: f32) {
        let i = axis.index();
        let state = &mut self.axes[i];
        let current = self.position[i];
        let goal = self.target[i];

        self.position[i] = if state.transition.is_active() {
            let window = state.transition.remaining(self.config.transition_duration);
            smooth_damp(current, goal + bias, &mut state.velocity, window, dt)
        } else if state.mode == AxisMode::Follow {
            state.velocity = 0.0;
            goal + bias
        } else {
            smooth_damp(current, goal, &mut state.velocity, self.config.follow_smoothing, dt)
        };
    }

    // ========================================================================
    // Configuration API
    // ========================================================================

    /// Sets one axis's mode. Setting the current mode is a no-op.
    ///
    /// With `transition`, the axis blends into the new mode over the
    /// configured transition duration; without it, the smoothing velocity is
    /// zeroed and the new rule applies directly.
    pub fn set_mode(&mut self, axis: Axis, mode: AxisMode, transition: bool) {
        let previous = self.mode(axis);
        if !self.axes[axis.index()].switch(mode, transition) {
            return;
        }

        tracing::debug!(
            "[camera] {:?} mode {:?} -> {:?} (transition={})",
            axis,
            previous,
            mode,
            transition
        );

        match axis {
            Axis::X => self.config.x_mode = mode,
            Axis::Y => self.config.y_mode = mode,
        }

        if axis == Axis::X {
            if mode == AxisMode::Moving {
                self.chase.reset(self.subject.position().x);
            } else if previous == AxisMode::Moving {
                self.chase.clear_flags();
            }
        }
    }

    pub fn set_x_mode(&mut self, mode: AxisMode, transition: bool) {
        self.set_mode(Axis::X, mode, transition);
    }

    pub fn set_y_mode(&mut self, mode: AxisMode, transition: bool) {
        self.set_mode(Axis::Y, mode, transition);
    }

    /// Sets both axes' modes at once.
    pub fn set_modes(&mut self, x: AxisMode, y: AxisMode, transition: bool) {
        self.set_mode(Axis::X, x, transition);
        self.set_mode(Axis::Y, y, transition);
    }

    /// Sets one axis's follow offset, either instantly or by blending from the
    /// current value. A new call while blending redefines the target.
    pub fn set_follow_offset(&mut self, axis: Axis, value: f32, transition: bool) {
        let i = axis.index();
        let mut target = self.follow_offset.target();
        target[i] = value;

        if transition {
            self.follow_offset.retarget(target);
        } else {
            let mut current = self.follow_offset.current();
            current[i] = value;
            self.follow_offset.place(current, target);
        }
        self.config.follow_offset = target.to_array();
    }

    /// Sets the look-ahead distance and its blend rate.
    pub fn set_directional_offset(&mut self, amount: f32, blend_rate: f32) {
        self.config.directional_offset = amount;
        self.config.directional_blend_rate = blend_rate;
        self.directional.set_rate(blend_rate);
    }

    pub fn set_follow_offset_blend_rate(&mut self, rate: f32) {
        self.config.follow_offset_blend_rate = rate;
        self.follow_offset.set_rate(rate);
    }

    /// Sets the position tracked by axes in `Moving` mode (Y only; X scrolls).
    pub fn set_moving_target(&mut self, position: Vec2) {
        self.config.moving_target = position.to_array();
    }

    pub fn set_chase_speed(&mut self, speed: f32) {
        self.config.chase.speed = speed;
    }

    pub fn set_static_position(&mut self, axis: Axis, value: f32) {
        self.config.static_position[axis.index()] = value;
    }

    pub fn set_static_positions(&mut self, position: Vec2) {
        self.config.static_position = position.to_array();
    }

    pub fn set_transition_duration(&mut self, duration: f32) {
        self.config.transition_duration = duration;
    }

    pub fn set_follow_smoothing(&mut self, smooth_time: f32) {
        self.config.follow_smoothing = smooth_time;
    }

    pub fn set_viewport(&mut self, viewport: ViewportConfig) {
        self.config.viewport = viewport;
    }

    /// Teleports the camera, dropping velocities and transitions.
    pub fn snap_to(&mut self, position: Vec2) {
        self.position = position;
        self.target = position;
        for state in &mut self.axes {
            state.halt();
        }
        if self.mode(Axis::X) == AxisMode::Moving {
            self.chase.reset(self.subject.position().x);
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn mode(&self, axis: Axis) -> AxisMode {
        self.axes[axis.index()].mode
    }

    pub fn is_x_moving(&self) -> bool {
        self.mode(Axis::X) == AxisMode::Moving
    }

    pub fn is_transitioning(&self, axis: Axis) -> bool {
        self.axes[axis.index()].transition.is_active()
    }

    /// Current (possibly mid-blend) follow offset.
    pub fn follow_offset(&self) -> Vec2 {
        self.follow_offset.current()
    }

    pub fn follow_offset_y(&self) -> f32 {
        self.follow_offset.current().y
    }

    pub fn is_follow_offset_blending(&self) -> bool {
        self.follow_offset.is_active()
    }

    pub fn directional_offset(&self) -> f32 {
        self.directional.current()
    }

    pub fn half_width(&self) -> f32 {
        self.config.viewport.half_width()
    }

    pub fn chase(&self) -> &ChaseState {
        &self.chase
    }

    pub fn is_tracking(&self) -> bool {
        self.chase.is_tracking()
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn subject(&self) -> &S {
        &self.subject
    }

    pub fn subject_mut(&mut self) -> &mut S {
        &mut self.subject
    }

    pub fn damage_sink(&self) -> &D {
        &self.sink
    }

    pub fn damage_sink_mut(&mut self) -> &mut D {
        &mut self.sink
    }
}

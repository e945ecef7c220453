//! Blending primitives shared by every smoothed camera quantity.
//!
//! - [`smooth_damp`]: critically damped approach that keeps a velocity across calls
//! - [`ExpBlend`]: exponential blend toward a target at a "fraction closed per second" rate
//! - [`TransitionTimer`]: elapsed-time accumulator bounded by a transition duration

use std::ops::{Add, Mul, Sub};

use bevy::math::Vec2;

/// Lower bound for smoothing time constants (keeps `omega` finite).
const MIN_SMOOTH_TIME: f32 = 1.0e-4;

/// Moves `current` toward `target` using a critically damped spring approximation.
///
/// `velocity` is carried between calls so consecutive retargets stay continuous.
/// The result never overshoots `target`; when it would, the value lands on the
/// target and the velocity is cleared.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;

    let output = target + (change + temp) * decay;
    if (target - current > 0.0) == (output > target) {
        *velocity = 0.0;
        return target;
    }
    output
}

/// Values that [`ExpBlend`] can interpolate.
pub trait Blendable: Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self> {
    /// Largest per-component distance to `other`.
    fn distance_to(self, other: Self) -> f32;
}

impl Blendable for f32 {
    fn distance_to(self, other: Self) -> f32 {
        (self - other).abs()
    }
}

impl Blendable for Vec2 {
    fn distance_to(self, other: Self) -> f32 {
        (self - other).abs().max_element()
    }
}

/// Exponential approach of a value toward a target.
///
/// Each [`advance`](Self::advance) closes `rate * dt` of the remaining gap
/// (clamped to `[0, 1]`). Once every component is within `epsilon` of the
/// target the value snaps onto it and the blend goes idle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpBlend<T> {
    current: T,
    target: T,
    rate: f32,
    active: bool,
}

impl<T: Blendable> ExpBlend<T> {
    /// Creates an idle blend resting at `value`.
    pub fn new(value: T, rate: f32) -> Self {
        Self {
            current: value,
            target: value,
            rate,
            active: false,
        }
    }

    pub fn current(&self) -> T {
        self.current
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Whether the value is still travelling toward its target.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_rate(&mut self, rate: f32) {
        self.rate = rate;
    }

    /// Redefines the target; blending restarts from the current value.
    pub fn retarget(&mut self, target: T) {
        self.target = target;
        self.active = true;
    }

    /// Places both ends explicitly. The blend stays active only if they differ.
    pub fn place(&mut self, current: T, target: T) {
        self.current = current;
        self.target = target;
        self.active = current.distance_to(target) > 0.0;
    }

    /// Jumps straight to `value` and stops blending.
    pub fn snap(&mut self, value: T) {
        self.place(value, value);
    }

    /// Advances the blend by `dt` seconds. Returns `true` on the call that settles it.
    pub fn advance(&mut self, dt: f32, epsilon: f32) -> bool {
        if !self.active {
            return false;
        }

        let t = (self.rate * dt).clamp(0.0, 1.0);
        self.current = self.current + (self.target - self.current) * t;

        if self.current.distance_to(self.target) <= epsilon {
            self.current = self.target;
            self.active = false;
            return true;
        }
        false
    }
}

/// Timer for a mode-transition window.
///
/// The window length is owned by the caller and passed in, so a duration
/// change applies to transitions already in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransitionTimer {
    elapsed: f32,
    active: bool,
}

impl TransitionTimer {
    /// Restarts the window from zero.
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    pub fn cancel(&mut self) {
        self.elapsed = 0.0;
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Time left in a window of `duration` seconds.
    pub fn remaining(&self, duration: f32) -> f32 {
        (duration - self.elapsed).max(0.0)
    }

    /// Accumulates `dt`. Returns `true` on the call that closes the window.
    pub fn advance(&mut self, dt: f32, duration: f32) -> bool {
        if !self.active {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed >= duration {
            self.active = false;
            return true;
        }
        false
    }
}

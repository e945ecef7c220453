//! Side-scroll camera core library.
//!
//! Per-axis camera motion for 2D side-scrolling games: `Static`, `Follow`
//! and `Moving` modes per axis, smoothed mode transitions, look-ahead and
//! follow-offset blending, and a chase scroll that punishes a subject for
//! falling behind the view.
//!
//! This library provides two layers:
//! - Plain controller: [`CameraMotionController`], usable from any game loop
//! - Bevy mode: components, systems and a plugin under [`bevy`]

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod chase;
pub mod config;
pub mod controller;
pub mod damping;
pub mod mode;
pub mod subject;

// Bevy integration
pub mod bevy;

pub use chase::{ChaseState, ChaseStep};
pub use config::{CameraConfig, ChaseConfig, ConfigError, ViewportConfig};
pub use controller::{CAMERA_DT, CameraMotionController};
pub use damping::{Blendable, ExpBlend, TransitionTimer, smooth_damp};
pub use mode::{Axis, AxisMode, AxisState};
pub use subject::{DamageLedger, DamageSink, Subject, SubjectProbe};

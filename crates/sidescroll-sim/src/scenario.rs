//! Scripted subject runs.
//!
//! A scenario is a camera configuration plus a list of phases. Each phase
//! moves the subject at a constant velocity for a fixed duration and may
//! push camera commands when it starts.

use std::path::Path;

use anyhow::Context;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use sidescroll_core::bevy::{
    CameraCommand, CameraCommandQueue, CameraSubject, FallDamageEvent, Health, MainCamera,
    SideScrollCamera, SideScrollCameraPlugin, apply_fall_damage,
};
use sidescroll_core::{Axis, AxisMode, CameraConfig};

/// Scripted run description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub camera: CameraConfig,
    pub camera_start_x: f32,
    pub subject_start: [f32; 2],
    pub subject_health: f32,
    /// Log camera state every this many fixed steps (0 disables).
    pub log_every: u32,
    pub phases: Vec<Phase>,
}

/// One constant-velocity segment of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    /// Seconds.
    pub duration: f32,
    /// World units per second.
    pub velocity: [f32; 2],
    /// Commands applied before the phase's first step.
    #[serde(default)]
    pub commands: Vec<CameraCommand>,
}

impl Phase {
    fn new(name: &str, duration: f32, velocity: [f32; 2], commands: Vec<CameraCommand>) -> Self {
        Self {
            name: name.to_string(),
            duration,
            velocity,
            commands,
        }
    }
}

impl Default for Scenario {
    /// Follow the subject through a run and a turn, switch to the chase
    /// scroll, let the subject stall until it falls behind, then hand the
    /// camera back to follow mode.
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            camera_start_x: 0.0,
            subject_start: [0.0, 0.0],
            subject_health: 1000.0,
            log_every: 30,
            phases: vec![
                Phase::new("idle", 1.0, [0.0, 0.0], Vec::new()),
                Phase::new("run", 2.0, [4.0, 0.0], Vec::new()),
                Phase::new("turn", 1.0, [-2.0, 0.0], Vec::new()),
                Phase::new(
                    "chase",
                    3.0,
                    [3.0, 0.0],
                    vec![
                        CameraCommand::SetChaseSpeed { speed: 3.5 },
                        CameraCommand::SetMode {
                            axis: Axis::X,
                            mode: AxisMode::Moving,
                            transition: true,
                        },
                    ],
                ),
                Phase::new("stall", 4.0, [0.0, 0.0], Vec::new()),
                Phase::new(
                    "recover",
                    2.0,
                    [2.0, 0.0],
                    vec![CameraCommand::SetModes {
                        x: AxisMode::Follow,
                        y: AxisMode::Follow,
                        transition: true,
                    }],
                ),
            ],
        }
    }
}

impl Scenario {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid scenario JSON")
    }

    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("failed to load scenario {}", path.display()))
    }
}

/// Counts fall-damage ticks for the report.
#[derive(Resource, Debug, Default)]
struct DamageTally {
    ticks: u32,
    total: f32,
}

fn tally_fall_damage(mut damage_events: MessageReader<FallDamageEvent>, mut tally: ResMut<DamageTally>) {
    for event in damage_events.read() {
        tally.ticks += 1;
        tally.total += event.amount;
    }
}

/// Outcome of a finished run.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub steps: u64,
    pub camera: Vec2,
    pub subject: Vec2,
    pub health: f32,
    pub damage_ticks: u32,
    pub damage_total: f32,
}

/// Headless app running a scenario one fixed step at a time.
pub struct Simulation {
    app: App,
    camera: Entity,
    subject: Entity,
    queue: CameraCommandQueue,
    steps: u64,
}

impl Simulation {
    pub fn new(scenario: &Scenario) -> Self {
        let queue = CameraCommandQueue::new();

        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SideScrollCameraPlugin::new(scenario.camera.clone(), queue.clone()));
        app.init_resource::<DamageTally>();
        app.add_systems(FixedUpdate, tally_fall_damage.after(apply_fall_damage));

        // Virtual time stays paused; the run is driven by explicit fixed steps.
        app.world_mut().resource_mut::<Time<Virtual>>().pause();

        let camera = app
            .world_mut()
            .spawn((MainCamera, Transform::from_xyz(scenario.camera_start_x, 0.0, 0.0)))
            .id();
        let subject = app
            .world_mut()
            .spawn((
                CameraSubject,
                Health::new(scenario.subject_health),
                Transform::from_translation(Vec2::from_array(scenario.subject_start).extend(0.0)),
            ))
            .id();

        // Attach the rig before the first step.
        app.update();

        Self {
            app,
            camera,
            subject,
            queue,
            steps: 0,
        }
    }

    /// Plays every phase and returns the final state.
    pub fn run(mut self, scenario: &Scenario) -> Report {
        let dt = self.app.world().resource::<Time<Fixed>>().timestep();
        let dt_secs = dt.as_secs_f32();

        for phase in &scenario.phases {
            tracing::info!(
                "[sim] Phase '{}' ({:.1}s, velocity={:?}, {} commands)",
                phase.name,
                phase.duration,
                phase.velocity,
                phase.commands.len()
            );
            if !phase.commands.is_empty() {
                for command in &phase.commands {
                    self.queue.push(command.clone());
                }
                // Fixed steps run before `Update`; apply commands ahead of step one.
                self.app.update();
            }

            let velocity = Vec2::from_array(phase.velocity);
            let steps = (phase.duration / dt_secs).round().max(0.0) as u64;
            for _ in 0..steps {
                self.move_subject(velocity * dt_secs);
                self.app
                    .world_mut()
                    .resource_mut::<Time<Fixed>>()
                    .accumulate_overstep(dt);
                self.app.update();
                self.steps += 1;

                if scenario.log_every > 0 && self.steps % u64::from(scenario.log_every) == 0 {
                    self.log_state(&phase.name, dt_secs);
                }
            }
        }

        self.report()
    }

    fn move_subject(&mut self, delta: Vec2) {
        let Some(mut transform) = self.app.world_mut().get_mut::<Transform>(self.subject) else {
            return;
        };
        transform.translation += delta.extend(0.0);
        if delta.x != 0.0 {
            transform.scale.x = transform.scale.x.abs() * delta.x.signum();
        }
    }

    fn log_state(&self, phase: &str, dt_secs: f32) {
        let world = self.app.world();
        let Some(camera) = world.get::<SideScrollCamera>(self.camera) else {
            return;
        };
        let subject = world
            .get::<Transform>(self.subject)
            .map_or(Vec2::ZERO, |t| t.translation.truncate());
        let rig = &camera.rig;

        tracing::info!(
            "[sim] t={:.2}s phase={} subject=({:.2}, {:.2}) camera=({:.2}, {:.2}) modes={:?}/{:?} tracking={} look_ahead={:.2}",
            self.steps as f32 * dt_secs,
            phase,
            subject.x,
            subject.y,
            rig.position().x,
            rig.position().y,
            rig.mode(Axis::X),
            rig.mode(Axis::Y),
            rig.is_tracking(),
            rig.directional_offset()
        );
    }

    fn report(&self) -> Report {
        let world = self.app.world();
        let tally = world.resource::<DamageTally>();
        Report {
            steps: self.steps,
            camera: world
                .get::<Transform>(self.camera)
                .map_or(Vec2::ZERO, |t| t.translation.truncate()),
            subject: world
                .get::<Transform>(self.subject)
                .map_or(Vec2::ZERO, |t| t.translation.truncate()),
            health: world.get::<Health>(self.subject).map_or(0.0, |h| h.current),
            damage_ticks: tally.ticks,
            damage_total: tally.total,
        }
    }
}

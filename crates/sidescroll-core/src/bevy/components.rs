//! ECS Components for the side-scroll camera.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::CameraConfig;
use crate::controller::CameraMotionController;
use crate::subject::{DamageLedger, DamageSink, SubjectProbe};

/// Marker for the main game camera.
#[derive(Component, Debug, Clone, Default)]
pub struct MainCamera;

/// Marker for the entity the camera follows (typically the player).
#[derive(Component, Debug, Clone, Default)]
pub struct CameraSubject;

/// Hit points of a damageable entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }
}

impl DamageSink for Health {
    fn take_damage(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }
}

impl From<&Transform> for SubjectProbe {
    fn from(transform: &Transform) -> Self {
        let facing = if transform.scale.x < 0.0 { -1.0 } else { 1.0 };
        Self::new(transform.translation.truncate(), facing)
    }
}

/// Controller type driven by the ECS: the subject is refreshed from the
/// subject's `Transform` each tick and damage is collected for messaging.
pub type CameraRig = CameraMotionController<SubjectProbe, DamageLedger>;

/// Side-scroll camera state attached to a [`MainCamera`] entity.
#[derive(Component, Debug, Clone)]
pub struct SideScrollCamera {
    /// The entity being followed.
    pub subject: Entity,
    pub rig: CameraRig,
}

impl SideScrollCamera {
    /// Builds a rig around the subject's current transform.
    ///
    /// `camera_x` is where the camera entity already sits on X.
    pub fn new(config: CameraConfig, subject: Entity, subject_transform: &Transform, camera_x: f32) -> Self {
        let probe = SubjectProbe::from(subject_transform);
        Self {
            subject,
            rig: CameraRig::new(config, probe, DamageLedger::default(), camera_x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_reads_facing_from_scale() {
        let transform = Transform::from_xyz(3.0, 4.0, 0.0).with_scale(Vec3::new(-1.0, 1.0, 1.0));
        let probe = SubjectProbe::from(&transform);
        assert_eq!(probe.position, Vec2::new(3.0, 4.0));
        assert!(probe.facing < 0.0);
    }

    #[test]
    fn test_probe_zero_scale_faces_right() {
        for scale_x in [0.0, -0.0] {
            let transform = Transform::from_xyz(0.0, 0.0, 0.0).with_scale(Vec3::new(scale_x, 1.0, 1.0));
            let probe = SubjectProbe::from(&transform);
            assert!((probe.facing - 1.0).abs() < f32::EPSILON, "scale.x = {scale_x}");
        }
    }

    #[test]
    fn test_health_floors_at_zero() {
        let mut health = Health::new(150.0);
        health.take_damage(100.0);
        assert!((health.current - 50.0).abs() < f32::EPSILON);
        assert!(!health.is_depleted());

        health.take_damage(100.0);
        assert!(health.current.abs() < f32::EPSILON);
        assert!(health.is_depleted());
    }
}

//! Rig attachment.

use bevy::prelude::*;

use crate::bevy::{CameraSettings, CameraSubject, MainCamera, SideScrollCamera};
use crate::mode::Axis;

/// System to attach a [`SideScrollCamera`] to main cameras that lack one.
///
/// Waits until exactly one [`CameraSubject`] exists. The camera keeps its
/// current X; its Y starts at the subject's Y plus the follow Y offset.
pub fn attach_camera_rig(
    mut commands: Commands,
    settings: Res<CameraSettings>,
    cameras: Query<(Entity, &Transform), (With<MainCamera>, Without<SideScrollCamera>)>,
    subjects: Query<(Entity, &Transform), With<CameraSubject>>,
) {
    if cameras.is_empty() {
        return;
    }

    let Ok((subject, subject_transform)) = subjects.single() else {
        return;
    };

    for (camera_entity, transform) in cameras.iter() {
        let camera = SideScrollCamera::new(
            settings.0.clone(),
            subject,
            subject_transform,
            transform.translation.x,
        );
        tracing::info!(
            "[camera] Attached side-scroll rig to {:?} (subject={:?}, modes={:?}/{:?})",
            camera_entity,
            subject,
            camera.rig.mode(Axis::X),
            camera.rig.mode(Axis::Y)
        );
        commands.entity(camera_entity).insert(camera);
    }
}

//! Camera systems for the side-scroller.
//!
//! - `attach_camera_rig`: builds the controller once a camera and a subject exist
//! - `tick_side_scroll_camera`: advances every rig by one fixed step

pub mod rig;

pub use rig::*;

use bevy::prelude::*;

use crate::bevy::{CameraSubject, FallDamageEvent, MainCamera, SideScrollCamera};
use crate::subject::SubjectProbe;

/// System to advance side-scroll cameras by one fixed step.
///
/// Refreshes the rig's subject from the subject's `Transform`, ticks the
/// controller, writes the result back to the camera `Transform`, and turns
/// any recorded fall damage into [`FallDamageEvent`] messages.
pub fn tick_side_scroll_camera(
    time: Res<Time>,
    mut cameras: Query<(&mut SideScrollCamera, &mut Transform), With<MainCamera>>,
    subjects: Query<&Transform, (With<CameraSubject>, Without<MainCamera>)>,
    mut damage_events: MessageWriter<FallDamageEvent>,
) {
    let dt = time.delta_secs();

    for (mut camera, mut transform) in cameras.iter_mut() {
        let target = camera.subject;
        let Ok(subject_transform) = subjects.get(target) else {
            // Subject despawned; hold the camera where it is.
            continue;
        };

        *camera.rig.subject_mut() = SubjectProbe::from(subject_transform);
        let position = camera.rig.tick(dt);

        transform.translation.x = position.x;
        transform.translation.y = position.y;

        for amount in camera.rig.damage_sink_mut().drain() {
            damage_events.write(FallDamageEvent { target, amount });
        }
    }
}

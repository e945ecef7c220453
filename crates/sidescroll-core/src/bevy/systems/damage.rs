//! Fall damage delivery.

use bevy::prelude::*;

use crate::bevy::{FallDamageEvent, Health};
use crate::subject::DamageSink;

/// System to apply [`FallDamageEvent`]s to the target's [`Health`].
///
/// Targets without `Health` ignore the message.
pub fn apply_fall_damage(mut damage_events: MessageReader<FallDamageEvent>, mut targets: Query<&mut Health>) {
    for event in damage_events.read() {
        let Ok(mut health) = targets.get_mut(event.target) else {
            continue;
        };

        health.take_damage(event.amount);
        tracing::info!(
            "[damage] {:?} took {} fall damage ({}/{} left)",
            event.target,
            event.amount,
            health.current,
            health.max
        );
    }
}

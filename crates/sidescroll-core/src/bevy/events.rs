//! ECS Events (Messages) for the side-scroll camera.
//!
//! Note: In Bevy 0.18+, buffered events use Message trait instead of Event.

use bevy::prelude::*;

/// Message fired each tick a chase camera leaves its subject behind.
#[derive(Message, Debug, Clone)]
pub struct FallDamageEvent {
    /// The entity that fell behind.
    pub target: Entity,
    /// Damage to apply.
    pub amount: f32,
}

//! Collaborators consumed by the camera controller.
//!
//! The controller reads a [`Subject`] every tick and reports chase-mode fall
//! damage to a [`DamageSink`]. Both are owned by the controller; share them
//! with other game code through `Rc<RefCell<_>>` or `Arc<Mutex<_>>`.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use bevy::math::Vec2;
use parking_lot::Mutex;

/// The tracked entity.
pub trait Subject {
    fn position(&self) -> Vec2;

    /// Horizontal facing: the sign of the subject's X scale.
    /// Negative faces left, anything else faces right.
    fn facing(&self) -> f32;
}

/// Receiver of fall damage. Fire-and-forget.
pub trait DamageSink {
    fn take_damage(&mut self, amount: f32);
}

impl<T: Subject + ?Sized> Subject for &T {
    fn position(&self) -> Vec2 {
        (**self).position()
    }

    fn facing(&self) -> f32 {
        (**self).facing()
    }
}

impl<T: Subject + ?Sized> Subject for Rc<RefCell<T>> {
    fn position(&self) -> Vec2 {
        self.borrow().position()
    }

    fn facing(&self) -> f32 {
        self.borrow().facing()
    }
}

impl<T: Subject + ?Sized> Subject for Arc<Mutex<T>> {
    fn position(&self) -> Vec2 {
        self.lock().position()
    }

    fn facing(&self) -> f32 {
        self.lock().facing()
    }
}

impl<T: DamageSink + ?Sized> DamageSink for &mut T {
    fn take_damage(&mut self, amount: f32) {
        (**self).take_damage(amount);
    }
}

impl<T: DamageSink + ?Sized> DamageSink for Rc<RefCell<T>> {
    fn take_damage(&mut self, amount: f32) {
        self.borrow_mut().take_damage(amount);
    }
}

impl<T: DamageSink + ?Sized> DamageSink for Arc<Mutex<T>> {
    fn take_damage(&mut self, amount: f32) {
        self.lock().take_damage(amount);
    }
}

/// Plain-data subject snapshot, refreshed by its owner before each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectProbe {
    pub position: Vec2,
    pub facing: f32,
}

impl Default for SubjectProbe {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            facing: 1.0,
        }
    }
}

impl SubjectProbe {
    pub fn new(position: Vec2, facing: f32) -> Self {
        Self { position, facing }
    }
}

impl Subject for SubjectProbe {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn facing(&self) -> f32 {
        self.facing
    }
}

/// Damage sink that records amounts until drained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DamageLedger {
    pending: Vec<f32>,
}

impl DamageLedger {
    pub fn pending(&self) -> &[f32] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes every recorded amount, oldest first.
    pub fn drain(&mut self) -> std::vec::Drain<'_, f32> {
        self.pending.drain(..)
    }
}

impl DamageSink for DamageLedger {
    fn take_damage(&mut self, amount: f32) {
        self.pending.push(amount);
    }
}

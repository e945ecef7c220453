//! Systems for the side-scroll camera.
//!
//! Organized by functionality:
//! - camera: Rig attachment and the fixed-step camera tick
//! - command: Command queue processing from external game logic
//! - damage: Fall damage delivery to `Health`

pub mod camera;
pub mod command;
pub mod damage;

pub use camera::*;
pub use command::*;
pub use damage::*;

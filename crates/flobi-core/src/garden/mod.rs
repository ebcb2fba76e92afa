//! Garden state: the user aggregate and its command engine.

pub mod engine;
pub mod state;

pub use engine::GardenEngine;
pub use state::{Gift, GiftKind, UserState, DEFAULT_PET_NAME};

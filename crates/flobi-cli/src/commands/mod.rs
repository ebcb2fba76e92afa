pub mod catalog;
pub mod config;
pub mod mission;
pub mod play;
pub mod progression;

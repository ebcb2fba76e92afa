//! # Flobi Core Library
//!
//! Core business logic for Flobi, a gamified learning companion: a
//! virtual pet grows through a plant lifecycle as a child completes
//! educational missions, trading screen time for learning time, with a
//! parent side for gifts, goals and offline-challenge verification.
//!
//! ## Architecture
//!
//! - **Garden Engine**: single-owner command handler for the user state
//!   aggregate; every mutation goes through it and yields events
//! - **Progression**: pure xp → level / growth-stage projection
//! - **Rewards**: pure policy mapping activities to resource deltas
//! - **Provider**: pluggable mission content source with a mandatory
//!   offline fallback
//!
//! State is process-lifetime only; the sole persisted artefact is the
//! TOML configuration (provider credentials, pet name).
//!
//! ## Key Components
//!
//! - [`GardenEngine`]: command interface over [`UserState`]
//! - [`progression_for`]: growth stage and level from accumulated xp
//! - [`MissionProvider`]: trait for generative content backends
//! - [`Config`]: application configuration management

pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod garden;
pub mod goals;
pub mod mission;
pub mod progression;
pub mod provider;
pub mod rewards;

pub use config::Config;
pub use error::{ConfigError, CoreError, ProviderError, Result};
pub use events::Event;
pub use garden::{GardenEngine, Gift, GiftKind, UserState};
pub use goals::{GoalKind, GoalStatus, GoalTemplate, WeeklyGoal};
pub use mission::{Mission, MissionKind, OfflineChallenge, Question};
pub use progression::{progression_for, GrowthStage, Progression};
pub use provider::{fallback_mission, GeminiProvider, MissionProvider, StaticProvider};
pub use rewards::{CareAction, RewardDeltas};

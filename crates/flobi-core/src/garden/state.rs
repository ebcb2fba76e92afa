//! The user state aggregate.
//!
//! A single flat record owned exclusively by [`GardenEngine`]; callers
//! read snapshots and mutate only through engine commands.
//!
//! [`GardenEngine`]: crate::garden::GardenEngine

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::goals::WeeklyGoal;
use crate::mission::OfflineChallenge;
use crate::rewards::{RewardDeltas, VITALITY_MAX};

/// Name a freshly hatched pet gets before the child renames it.
pub const DEFAULT_PET_NAME: &str = "Flobi";

/// Resource kinds a parent can send as a gift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GiftKind {
    Dewdrops,
    Vitality,
    Xp,
    Fertilizer,
}

impl GiftKind {
    /// Label shown on the gift card in the shop.
    pub fn label(&self) -> &'static str {
        match self {
            GiftKind::Dewdrops => "Dew Drops",
            GiftKind::Vitality => "Life Energy",
            GiftKind::Xp => "Knowledge Points",
            GiftKind::Fertilizer => "Super Fertilizer",
        }
    }
}

/// A parent-sent bonus waiting for the child to claim it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gift {
    pub id: String,
    pub kind: GiftKind,
    pub label: String,
}

impl Gift {
    pub fn new(kind: GiftKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            label: kind.label().to_string(),
        }
    }
}

/// All user-facing state for one child's garden.
///
/// `xp` is authoritative; level and growth stage are derived views
/// computed by [`progression_for`](crate::progression::progression_for).
/// Counters are additive only. `vitality` stays within 0..=100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserState {
    pub pet_name: String,
    pub xp: u32,
    pub vitality: u32,
    pub screen_time_minutes: u32,
    pub education_time_minutes: u32,
    pub missions_completed: u32,
    /// Consecutive successful daily missions.
    pub streak: u32,
    pub dewdrops: u32,
    pub fertilizer: u32,
    #[serde(default)]
    pub badges: Vec<String>,
    /// Parent-proposed goals, in insertion order (pending first in the UI).
    #[serde(default)]
    pub active_goals: Vec<WeeklyGoal>,
    /// At most one offline challenge awaiting parent verification.
    #[serde(default)]
    pub pending_offline_mission: Option<OfflineChallenge>,
    /// Parent gifts not yet claimed by the child.
    #[serde(default)]
    pub pending_gifts: Vec<Gift>,
}

impl Default for UserState {
    fn default() -> Self {
        Self {
            pet_name: DEFAULT_PET_NAME.to_string(),
            xp: 0,
            vitality: VITALITY_MAX,
            screen_time_minutes: 0,
            education_time_minutes: 0,
            missions_completed: 0,
            streak: 0,
            dewdrops: 0,
            fertilizer: 0,
            badges: Vec::new(),
            active_goals: Vec::new(),
            pending_offline_mission: None,
            pending_gifts: Vec::new(),
        }
    }
}

impl UserState {
    /// A mid-game state used by the interactive CLI session so there is
    /// something to look at without grinding from zero.
    pub fn demo() -> Self {
        Self {
            pet_name: DEFAULT_PET_NAME.to_string(),
            xp: 288,
            vitality: 48,
            screen_time_minutes: 48,
            education_time_minutes: 120,
            missions_completed: 12,
            streak: 3,
            dewdrops: 6,
            fertilizer: 2,
            badges: vec!["Offline Hero".to_string(), "Top Student".to_string()],
            ..Default::default()
        }
    }

    /// Apply additive reward deltas atomically. Vitality saturates at
    /// [`VITALITY_MAX`].
    pub fn apply(&mut self, deltas: &RewardDeltas) {
        self.xp += deltas.xp;
        self.dewdrops += deltas.dewdrops;
        self.fertilizer += deltas.fertilizer;
        self.vitality = (self.vitality + deltas.vitality).min(VITALITY_MAX);
        self.screen_time_minutes += deltas.screen_time_minutes;
        self.education_time_minutes += deltas.education_time_minutes;
        self.missions_completed += deltas.missions_completed;
        self.streak += deltas.streak;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_a_seed() {
        let state = UserState::default();
        assert_eq!(state.pet_name, "Flobi");
        assert_eq!(state.xp, 0);
        assert!(state.active_goals.is_empty());
        assert!(state.pending_offline_mission.is_none());
    }

    #[test]
    fn apply_saturates_vitality() {
        let mut state = UserState {
            vitality: 95,
            ..Default::default()
        };
        state.apply(&RewardDeltas {
            vitality: 25,
            ..Default::default()
        });
        assert_eq!(state.vitality, 100);
    }

    #[test]
    fn apply_is_additive() {
        let mut state = UserState::demo();
        let before = state.clone();
        state.apply(&RewardDeltas {
            xp: 50,
            dewdrops: 2,
            screen_time_minutes: 15,
            ..Default::default()
        });
        assert_eq!(state.xp, before.xp + 50);
        assert_eq!(state.dewdrops, before.dewdrops + 2);
        assert_eq!(state.screen_time_minutes, before.screen_time_minutes + 15);
        assert_eq!(state.streak, before.streak);
    }
}

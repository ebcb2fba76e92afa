//! Reward policy.
//!
//! Pure functions mapping a completed activity to the additive deltas
//! it grants. Spends (watering, fertilizing, shop purchases) are gated
//! and applied by the garden engine so that an insufficient resource
//! never produces a partial update.

use serde::{Deserialize, Serialize};

use crate::garden::state::GiftKind;
use crate::mission::MissionKind;

/// Upper bound on pet vitality.
pub const VITALITY_MAX: u32 = 100;

/// Dewdrops spent per watering; vitality gained.
pub const WATER_COST: u32 = 1;
pub const WATER_VITALITY: u32 = 10;

/// Fertilizer spent per use; xp gained.
pub const FERTILIZE_COST: u32 = 1;
pub const FERTILIZE_XP: u32 = 100;

/// Rewards for a parent-verified offline challenge.
pub const OFFLINE_SCREEN_MINUTES: u32 = 15;
pub const OFFLINE_XP: u32 = 50;
pub const OFFLINE_DEWDROPS: u32 = 5;
pub const OFFLINE_VITALITY: u32 = 15;

/// Care actions the child can perform on the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareAction {
    Water,
    Fertilize,
}

/// Additive resource deltas produced by the reward policy.
///
/// Applied atomically to the user state; the vitality component
/// saturates at [`VITALITY_MAX`] when applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardDeltas {
    pub xp: u32,
    pub dewdrops: u32,
    pub fertilizer: u32,
    pub vitality: u32,
    pub screen_time_minutes: u32,
    pub education_time_minutes: u32,
    pub missions_completed: u32,
    pub streak: u32,
}

/// Deltas for completing a quiz-like mission.
///
/// A perfect score (every question right) earns one fertilizer on top
/// of the base rewards. Failure still grants a small consolation so the
/// attempt is never worthless.
pub fn mission_rewards(
    kind: MissionKind,
    success: bool,
    score: u32,
    total: u32,
    reward_minutes: u32,
) -> RewardDeltas {
    if !success {
        return RewardDeltas {
            xp: 10,
            vitality: 5,
            education_time_minutes: 2,
            ..Default::default()
        };
    }

    let daily = kind.is_daily();
    RewardDeltas {
        xp: if daily { 100 } else { 50 },
        dewdrops: if daily { 5 } else { 2 },
        fertilizer: if score == total { 1 } else { 0 },
        vitality: if daily { 25 } else { 15 },
        screen_time_minutes: reward_minutes,
        education_time_minutes: 10,
        missions_completed: 1,
        streak: if daily { 1 } else { 0 },
    }
}

/// Deltas for an offline challenge the parent confirmed.
pub fn offline_rewards() -> RewardDeltas {
    RewardDeltas {
        xp: OFFLINE_XP,
        dewdrops: OFFLINE_DEWDROPS,
        vitality: OFFLINE_VITALITY,
        screen_time_minutes: OFFLINE_SCREEN_MINUTES,
        ..Default::default()
    }
}

/// Deltas for claiming a parent gift.
pub fn gift_rewards(kind: GiftKind) -> RewardDeltas {
    match kind {
        GiftKind::Dewdrops => RewardDeltas {
            dewdrops: 5,
            ..Default::default()
        },
        GiftKind::Vitality => RewardDeltas {
            vitality: 20,
            ..Default::default()
        },
        GiftKind::Xp => RewardDeltas {
            xp: 50,
            ..Default::default()
        },
        GiftKind::Fertilizer => RewardDeltas {
            fertilizer: 1,
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_success_perfect_score() {
        let d = mission_rewards(MissionKind::Daily, true, 5, 5, 25);
        assert_eq!(d.xp, 100);
        assert_eq!(d.dewdrops, 5);
        assert_eq!(d.fertilizer, 1);
        assert_eq!(d.vitality, 25);
        assert_eq!(d.screen_time_minutes, 25);
        assert_eq!(d.education_time_minutes, 10);
        assert_eq!(d.missions_completed, 1);
        assert_eq!(d.streak, 1);
    }

    #[test]
    fn quiz_success_imperfect_score() {
        let d = mission_rewards(MissionKind::Quiz, true, 2, 3, 15);
        assert_eq!(d.xp, 50);
        assert_eq!(d.dewdrops, 2);
        assert_eq!(d.fertilizer, 0);
        assert_eq!(d.vitality, 15);
        assert_eq!(d.streak, 0);
        assert_eq!(d.missions_completed, 1);
    }

    #[test]
    fn failure_grants_consolation_only() {
        let d = mission_rewards(MissionKind::Quiz, false, 1, 3, 15);
        assert_eq!(d.xp, 10);
        assert_eq!(d.vitality, 5);
        assert_eq!(d.education_time_minutes, 2);
        assert_eq!(d.dewdrops, 0);
        assert_eq!(d.fertilizer, 0);
        assert_eq!(d.screen_time_minutes, 0);
        assert_eq!(d.missions_completed, 0);
        assert_eq!(d.streak, 0);
    }

    #[test]
    fn zero_question_mission_counts_as_perfect() {
        // Instructional missions report a full score, so they earn the
        // perfect-score fertilizer like a flawless quiz does.
        let d = mission_rewards(MissionKind::Creative, true, 0, 0, 10);
        assert_eq!(d.fertilizer, 1);
    }

    #[test]
    fn gift_deltas() {
        assert_eq!(gift_rewards(GiftKind::Dewdrops).dewdrops, 5);
        assert_eq!(gift_rewards(GiftKind::Vitality).vitality, 20);
        assert_eq!(gift_rewards(GiftKind::Xp).xp, 50);
        assert_eq!(gift_rewards(GiftKind::Fertilizer).fertilizer, 1);
    }

    #[test]
    fn offline_deltas() {
        let d = offline_rewards();
        assert_eq!(
            (d.xp, d.dewdrops, d.vitality, d.screen_time_minutes),
            (50, 5, 15, 15)
        );
        assert_eq!(d.missions_completed, 0);
    }
}

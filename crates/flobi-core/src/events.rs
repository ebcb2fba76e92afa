use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::garden::state::{GiftKind, UserState};
use crate::mission::MissionKind;
use crate::progression::GrowthStage;
use crate::rewards::{CareAction, RewardDeltas};

/// Every accepted engine command produces an Event.
/// The front-end renders them; rejected commands produce none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A mission became active (freshly generated or the canned fallback).
    MissionStarted {
        mission_id: String,
        kind: MissionKind,
        title: String,
        /// True when the content provider failed and the fallback was served.
        fallback: bool,
        at: DateTime<Utc>,
    },
    MissionCompleted {
        mission_id: String,
        kind: MissionKind,
        success: bool,
        score: u32,
        total: u32,
        rewards: RewardDeltas,
        at: DateTime<Utc>,
    },
    /// The child backed out of the active mission; no rewards.
    MissionAbandoned {
        mission_id: String,
        at: DateTime<Utc>,
    },
    /// Level increased past a 500-xp boundary. Fires exactly once per
    /// transition and never for the level an engine was constructed at.
    LevelUp {
        level: u32,
        stage: GrowthStage,
        at: DateTime<Utc>,
    },
    CareApplied {
        action: CareAction,
        vitality: u32,
        xp: u32,
        at: DateTime<Utc>,
    },
    OfflineSelected {
        challenge_id: String,
        title: String,
        at: DateTime<Utc>,
    },
    /// Parent verdict on the pending offline challenge. Rewards are
    /// present only when the parent accepted.
    OfflineVerified {
        challenge_id: String,
        accepted: bool,
        rewards: Option<RewardDeltas>,
        at: DateTime<Utc>,
    },
    GiftSent {
        gift_id: String,
        kind: GiftKind,
        at: DateTime<Utc>,
    },
    GiftClaimed {
        gift_id: String,
        kind: GiftKind,
        rewards: RewardDeltas,
        at: DateTime<Utc>,
    },
    GoalProposed {
        goal_id: String,
        title: String,
        at: DateTime<Utc>,
    },
    GoalAccepted {
        goal_id: String,
        at: DateTime<Utc>,
    },
    GoalRejected {
        goal_id: String,
        at: DateTime<Utc>,
    },
    PurchaseMade {
        item_id: String,
        price: u32,
        dewdrops_left: u32,
        at: DateTime<Utc>,
    },
    PetRenamed {
        name: String,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        level: u32,
        stage: GrowthStage,
        state: UserState,
        at: DateTime<Utc>,
    },
}

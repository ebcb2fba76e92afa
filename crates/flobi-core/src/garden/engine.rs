//! Garden engine.
//!
//! The engine exclusively owns the [`UserState`] aggregate and is the
//! only place mutations happen. Commands apply their deltas atomically
//! and report what happened as [`Event`]s; a rejected command (not
//! enough resources, nothing pending) returns no events and leaves the
//! state untouched.
//!
//! Commands that can raise xp return `Vec<Event>` so a `LevelUp` can
//! ride along; commands that cannot return `Option<Event>`.

use chrono::Utc;
use tracing::{debug, warn};

use crate::catalog::ShopItem;
use crate::events::Event;
use crate::goals::{GoalStatus, GoalTemplate, WeeklyGoal};
use crate::mission::{Mission, MissionKind, OfflineChallenge};
use crate::progression::{progression_for, Progression};
use crate::provider::{fallback_mission, MissionProvider};
use crate::rewards::{
    self, CareAction, FERTILIZE_COST, FERTILIZE_XP, WATER_COST, WATER_VITALITY,
};

use super::state::{Gift, GiftKind, UserState};

/// Single-owner command handler for one child's garden.
#[derive(Debug, Clone)]
pub struct GardenEngine {
    state: UserState,
    active_mission: Option<Mission>,
    /// Level at the last command, for edge-detecting level-ups.
    /// Captured at construction so loading a high-xp state never fires.
    prev_level: u32,
}

impl GardenEngine {
    pub fn new(state: UserState) -> Self {
        let prev_level = progression_for(state.xp).level;
        Self {
            state,
            active_mission: None,
            prev_level,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &UserState {
        &self.state
    }

    pub fn progression(&self) -> Progression {
        progression_for(self.state.xp)
    }

    pub fn active_mission(&self) -> Option<&Mission> {
        self.active_mission.as_ref()
    }

    /// Full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let prog = self.progression();
        Event::StateSnapshot {
            level: prog.level,
            stage: prog.stage,
            state: self.state.clone(),
            at: Utc::now(),
        }
    }

    // ── Mission flow ─────────────────────────────────────────────────

    /// Ask the provider for mission content and make it active.
    ///
    /// Provider failures are absorbed here: the canned fallback mission
    /// becomes active instead and the event is flagged accordingly.
    /// Rejected while another mission is active (one outstanding
    /// request at a time).
    pub async fn start_mission(
        &mut self,
        provider: &dyn MissionProvider,
        kind: MissionKind,
        subject: Option<&str>,
    ) -> Option<Event> {
        if self.active_mission.is_some() {
            debug!(kind = %kind, "start_mission rejected: a mission is already active");
            return None;
        }

        let (mission, fallback) = match provider.request_mission(kind, subject).await {
            Ok(mission) => (mission, false),
            Err(err) => {
                warn!(provider = provider.name(), error = %err, "mission generation failed, serving fallback");
                (fallback_mission(), true)
            }
        };

        let event = Event::MissionStarted {
            mission_id: mission.id.clone(),
            kind: mission.kind,
            title: mission.title.clone(),
            fallback,
            at: Utc::now(),
        };
        self.active_mission = Some(mission);
        Some(event)
    }

    /// Finish the active mission and apply the reward table.
    pub fn complete_mission(&mut self, success: bool, score: u32, total: u32) -> Vec<Event> {
        let Some(mission) = self.active_mission.take() else {
            return Vec::new();
        };

        let deltas = rewards::mission_rewards(mission.kind, success, score, total, mission.reward_minutes);
        self.state.apply(&deltas);
        debug!(mission = %mission.id, success, score, total, "mission completed");

        let mut events = vec![Event::MissionCompleted {
            mission_id: mission.id,
            kind: mission.kind,
            success,
            score,
            total,
            rewards: deltas,
            at: Utc::now(),
        }];
        self.check_level_up(&mut events);
        events
    }

    /// Drop the active mission without rewards.
    pub fn abandon_mission(&mut self) -> Option<Event> {
        let mission = self.active_mission.take()?;
        Some(Event::MissionAbandoned {
            mission_id: mission.id,
            at: Utc::now(),
        })
    }

    // ── Offline challenges ───────────────────────────────────────────

    /// Child picks a real-world challenge; it waits for parent verification.
    /// Picking again replaces the previous pending challenge.
    pub fn select_offline_challenge(&mut self, challenge: OfflineChallenge) -> Option<Event> {
        let event = Event::OfflineSelected {
            challenge_id: challenge.id.clone(),
            title: challenge.title.clone(),
            at: Utc::now(),
        };
        self.state.pending_offline_mission = Some(challenge);
        Some(event)
    }

    /// Parent verdict. Acceptance grants the offline reward bundle;
    /// either way the pending slot is cleared.
    pub fn verify_offline(&mut self, accepted: bool) -> Vec<Event> {
        let Some(challenge) = self.state.pending_offline_mission.take() else {
            return Vec::new();
        };

        let rewards = if accepted {
            let deltas = rewards::offline_rewards();
            self.state.apply(&deltas);
            Some(deltas)
        } else {
            None
        };

        let mut events = vec![Event::OfflineVerified {
            challenge_id: challenge.id,
            accepted,
            rewards,
            at: Utc::now(),
        }];
        self.check_level_up(&mut events);
        events
    }

    // ── Care actions ─────────────────────────────────────────────────

    /// Spend one dewdrop to raise vitality. Rejected at zero dewdrops.
    pub fn water(&mut self) -> Option<Event> {
        if self.state.dewdrops < WATER_COST {
            return None;
        }
        self.state.dewdrops -= WATER_COST;
        self.state.vitality = (self.state.vitality + WATER_VITALITY).min(rewards::VITALITY_MAX);
        Some(Event::CareApplied {
            action: CareAction::Water,
            vitality: self.state.vitality,
            xp: self.state.xp,
            at: Utc::now(),
        })
    }

    /// Spend one fertilizer for a flat xp boost. Rejected at zero.
    pub fn fertilize(&mut self) -> Vec<Event> {
        if self.state.fertilizer < FERTILIZE_COST {
            return Vec::new();
        }
        self.state.fertilizer -= FERTILIZE_COST;
        self.state.xp += FERTILIZE_XP;
        let mut events = vec![Event::CareApplied {
            action: CareAction::Fertilize,
            vitality: self.state.vitality,
            xp: self.state.xp,
            at: Utc::now(),
        }];
        self.check_level_up(&mut events);
        events
    }

    // ── Shop & gifts ─────────────────────────────────────────────────

    /// Buy a shop item. Purchases only spend dewdrops; rejected when
    /// the child cannot afford the price.
    pub fn buy(&mut self, item: &ShopItem) -> Option<Event> {
        if self.state.dewdrops < item.price {
            return None;
        }
        self.state.dewdrops -= item.price;
        Some(Event::PurchaseMade {
            item_id: item.id.clone(),
            price: item.price,
            dewdrops_left: self.state.dewdrops,
            at: Utc::now(),
        })
    }

    /// Parent sends a gift; it sits in the shop until claimed.
    pub fn send_gift(&mut self, kind: GiftKind) -> Event {
        let gift = Gift::new(kind);
        let event = Event::GiftSent {
            gift_id: gift.id.clone(),
            kind,
            at: Utc::now(),
        };
        self.state.pending_gifts.push(gift);
        event
    }

    /// Child claims a pending gift by id.
    pub fn claim_gift(&mut self, gift_id: &str) -> Vec<Event> {
        let Some(pos) = self.state.pending_gifts.iter().position(|g| g.id == gift_id) else {
            return Vec::new();
        };
        let gift = self.state.pending_gifts.remove(pos);
        let deltas = rewards::gift_rewards(gift.kind);
        self.state.apply(&deltas);

        let mut events = vec![Event::GiftClaimed {
            gift_id: gift.id,
            kind: gift.kind,
            rewards: deltas,
            at: Utc::now(),
        }];
        self.check_level_up(&mut events);
        events
    }

    // ── Weekly goals ─────────────────────────────────────────────────

    /// Parent proposes a goal to the child (template → pending).
    pub fn propose_goal(&mut self, template: &GoalTemplate, reward_override: Option<String>) -> Event {
        let goal = WeeklyGoal::proposed_from(template, reward_override);
        let event = Event::GoalProposed {
            goal_id: goal.id.clone(),
            title: goal.title.clone(),
            at: Utc::now(),
        };
        self.state.active_goals.push(goal);
        event
    }

    /// Child accepts a pending goal (pending → active).
    pub fn accept_goal(&mut self, goal_id: &str) -> Option<Event> {
        let goal = self
            .state
            .active_goals
            .iter_mut()
            .find(|g| g.id == goal_id)?;
        if !goal.accept() {
            return None;
        }
        Some(Event::GoalAccepted {
            goal_id: goal_id.to_string(),
            at: Utc::now(),
        })
    }

    /// Child rejects a pending goal; it is removed entirely.
    pub fn reject_goal(&mut self, goal_id: &str) -> Option<Event> {
        let pos = self
            .state
            .active_goals
            .iter()
            .position(|g| g.id == goal_id && g.status == GoalStatus::Pending)?;
        self.state.active_goals.remove(pos);
        Some(Event::GoalRejected {
            goal_id: goal_id.to_string(),
            at: Utc::now(),
        })
    }

    // ── Pet ──────────────────────────────────────────────────────────

    /// Rename the pet. Names are 1-12 characters after trimming.
    pub fn rename_pet(&mut self, name: &str) -> Option<Event> {
        let name = name.trim();
        let len = name.chars().count();
        if len == 0 || len > 12 {
            return None;
        }
        self.state.pet_name = name.to_string();
        Some(Event::PetRenamed {
            name: name.to_string(),
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Emit a LevelUp when xp crossed a level boundary since the last
    /// command. Stage-only changes stay silent.
    fn check_level_up(&mut self, events: &mut Vec<Event>) {
        let prog = progression_for(self.state.xp);
        if prog.level > self.prev_level {
            debug!(level = prog.level, stage = %prog.stage, "level up");
            events.push(Event::LevelUp {
                level: prog.level,
                stage: prog.stage,
                at: Utc::now(),
            });
        }
        self.prev_level = prog.level;
    }
}

impl Default for GardenEngine {
    fn default() -> Self {
        Self::new(UserState::default())
    }
}

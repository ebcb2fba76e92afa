//! Weekly goals negotiated between parent and child.
//!
//! A goal is drafted by the parent from a template, proposed to the
//! child (`Pending`), and either accepted (`Active`) or rejected
//! (removed from the list). `target`/`current` progress fields exist in
//! the data model, but no rule advances `current` or reaches
//! `Completed` yet; that behavior is deliberately left undefined.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What a weekly goal counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Missions,
    Offline,
    Streak,
    Custom,
}

/// Lifecycle state of a weekly goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    /// Template material, not yet sent to the child.
    Draft,
    /// Proposed, awaiting the child's decision.
    Pending,
    /// Accepted by the child.
    Active,
    /// Finished. Currently unreachable: nothing advances `current`.
    Completed,
}

/// A parent-proposed, child-accepted habit target with a negotiated
/// offline reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyGoal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: GoalKind,
    pub target: u32,
    pub current: u32,
    pub status: GoalStatus,
    /// Free-text reward agreed between parent and child.
    pub reward: String,
}

/// A pre-baked goal the parent can propose as-is or with a custom reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTemplate {
    pub title: String,
    pub description: String,
    pub kind: GoalKind,
    pub target: u32,
    pub reward: String,
}

impl WeeklyGoal {
    /// Instantiate a pending goal from a template, optionally overriding
    /// the reward with one the parent typed in.
    pub fn proposed_from(template: &GoalTemplate, reward_override: Option<String>) -> Self {
        let reward = match reward_override {
            Some(r) if !r.trim().is_empty() => r,
            _ => template.reward.clone(),
        };
        Self {
            id: Uuid::new_v4().to_string(),
            title: template.title.clone(),
            description: template.description.clone(),
            kind: template.kind,
            target: template.target,
            current: 0,
            status: GoalStatus::Pending,
            reward,
        }
    }

    /// Pending → Active. Returns false if the goal was not pending.
    pub fn accept(&mut self) -> bool {
        if self.status == GoalStatus::Pending {
            self.status = GoalStatus::Active;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> GoalTemplate {
        GoalTemplate {
            title: "5 Edu Missions".into(),
            description: "Finish 5 extra knowledge missions this week.".into(),
            kind: GoalKind::Missions,
            target: 5,
            reward: "15 min of extra play".into(),
        }
    }

    #[test]
    fn proposal_starts_pending_with_zero_progress() {
        let goal = WeeklyGoal::proposed_from(&template(), None);
        assert_eq!(goal.status, GoalStatus::Pending);
        assert_eq!(goal.current, 0);
        assert_eq!(goal.target, 5);
        assert_eq!(goal.reward, "15 min of extra play");
    }

    #[test]
    fn reward_override_wins_unless_blank() {
        let goal = WeeklyGoal::proposed_from(&template(), Some("Ice cream trip".into()));
        assert_eq!(goal.reward, "Ice cream trip");

        let goal = WeeklyGoal::proposed_from(&template(), Some("   ".into()));
        assert_eq!(goal.reward, "15 min of extra play");
    }

    #[test]
    fn accept_only_from_pending() {
        let mut goal = WeeklyGoal::proposed_from(&template(), None);
        assert!(goal.accept());
        assert_eq!(goal.status, GoalStatus::Active);
        assert!(!goal.accept());
    }
}

//! Mission content types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kinds of educational activity a mission can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionKind {
    Quiz,
    Logic,
    Language,
    Creative,
    Offline,
    Daily,
}

impl MissionKind {
    /// Whether completing this mission advances the daily streak.
    pub fn is_daily(&self) -> bool {
        matches!(self, MissionKind::Daily)
    }

    /// Number of quiz questions requested from the content provider.
    pub fn question_count(&self) -> usize {
        match self {
            MissionKind::Daily => 5,
            MissionKind::Quiz => 3,
            _ => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MissionKind::Quiz => "quiz",
            MissionKind::Logic => "logic",
            MissionKind::Language => "language",
            MissionKind::Creative => "creative",
            MissionKind::Offline => "offline",
            MissionKind::Daily => "daily",
        }
    }
}

impl std::fmt::Display for MissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MissionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quiz" => Ok(MissionKind::Quiz),
            "logic" => Ok(MissionKind::Logic),
            "language" => Ok(MissionKind::Language),
            "creative" => Ok(MissionKind::Creative),
            "offline" => Ok(MissionKind::Offline),
            "daily" => Ok(MissionKind::Daily),
            other => Err(format!("unknown mission kind: {other}")),
        }
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    /// Answer options in presentation order.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_index: usize,
}

/// A discrete educational activity served by the content provider.
///
/// Quiz-like missions carry questions; instructional missions
/// (creative, offline) carry only a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub kind: MissionKind,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Screen time minutes granted on success.
    pub reward_minutes: u32,
}

impl Mission {
    pub fn new(
        kind: MissionKind,
        title: impl Into<String>,
        description: impl Into<String>,
        reward_minutes: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title: title.into(),
            description: description.into(),
            questions: Vec::new(),
            reward_minutes,
        }
    }

    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = questions;
        self
    }
}

/// A real-world task the child performs away from the screen.
/// Rewards are granted only after a parent verifies completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineChallenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub reward_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [
            MissionKind::Quiz,
            MissionKind::Logic,
            MissionKind::Language,
            MissionKind::Creative,
            MissionKind::Offline,
            MissionKind::Daily,
        ] {
            assert_eq!(MissionKind::from_str(kind.as_str()).unwrap(), kind);
        }
        assert!(MissionKind::from_str("chess").is_err());
    }

    #[test]
    fn question_counts_per_kind() {
        assert_eq!(MissionKind::Daily.question_count(), 5);
        assert_eq!(MissionKind::Quiz.question_count(), 3);
        assert_eq!(MissionKind::Creative.question_count(), 0);
    }

    #[test]
    fn mission_serializes_without_questions() {
        let mission = Mission::new(MissionKind::Creative, "Write a story", "About a dragon", 10);
        let json = serde_json::to_value(&mission).unwrap();
        assert_eq!(json["kind"], "creative");
        assert!(json["questions"].as_array().unwrap().is_empty());
    }
}

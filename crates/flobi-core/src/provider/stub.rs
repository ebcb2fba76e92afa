//! Deterministic offline provider.
//!
//! Serves canned missions with no network access. Used by the CLI when
//! no API key is configured and by tests that exercise the engine's
//! mission flow.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::mission::{Mission, MissionKind, Question};
use crate::provider::MissionProvider;

#[derive(Debug, Default)]
pub struct StaticProvider;

impl StaticProvider {
    pub fn new() -> Self {
        Self
    }
}

fn question(text: &str, options: [&str; 3], correct_index: usize) -> Question {
    Question {
        question: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_index,
    }
}

fn quiz_questions(subject: Option<&str>) -> Vec<Question> {
    // Generic questions; the subject only flavors the title.
    let _ = subject;
    vec![
        question("Which planet is closest to the sun?", ["Venus", "Mercury", "Mars"], 1),
        question("What is 7 x 8?", ["54", "56", "64"], 1),
        question("What do plants need to make food?", ["Sunlight", "Darkness", "Wind"], 0),
    ]
}

fn daily_questions() -> Vec<Question> {
    vec![
        question("What comes next: 2, 4, 8, 16, ...?", ["24", "32", "20"], 1),
        question("Which animal sleeps standing up?", ["Horse", "Cat", "Snake"], 0),
        question("How many continents are there?", ["5", "6", "7"], 2),
        question("Water freezes at what temperature?", ["0°C", "10°C", "100°C"], 0),
        question("Which is the largest ocean?", ["Atlantic", "Pacific", "Indian"], 1),
    ]
}

#[async_trait]
impl MissionProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn request_mission(
        &self,
        kind: MissionKind,
        subject: Option<&str>,
    ) -> Result<Mission, ProviderError> {
        let mission = match kind {
            MissionKind::Daily => Mission::new(
                kind,
                "Mission of the Day",
                "Five mixed questions from logic, science and world trivia.",
                25,
            )
            .with_questions(daily_questions()),
            MissionKind::Quiz => {
                let title = match subject {
                    Some(s) => format!("{s} Quiz"),
                    None => "Knowledge Quiz".to_string(),
                };
                Mission::new(kind, title, "Three questions to test what you know.", 15)
                    .with_questions(quiz_questions(subject))
            }
            MissionKind::Logic => Mission::new(
                kind,
                "Pattern Hunt",
                "Find the pattern: draw the next shape in the sequence on paper.",
                10,
            ),
            MissionKind::Language => Mission::new(
                kind,
                "Word Collector",
                "Write down 10 English words you can see around the room.",
                10,
            ),
            MissionKind::Creative => Mission::new(
                kind,
                "Story Seed",
                "Write a six-sentence story about a plant that learned to talk.",
                10,
            ),
            MissionKind::Offline => Mission::new(
                kind,
                "Step Outside",
                "Spend 15 minutes outdoors and note three things you heard.",
                15,
            ),
        };
        Ok(mission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn daily_has_five_questions() {
        let mission = StaticProvider::new()
            .request_mission(MissionKind::Daily, None)
            .await
            .unwrap();
        assert_eq!(mission.questions.len(), 5);
        assert_eq!(mission.reward_minutes, 25);
    }

    #[tokio::test]
    async fn quiz_title_carries_subject() {
        let mission = StaticProvider::new()
            .request_mission(MissionKind::Quiz, Some("History"))
            .await
            .unwrap();
        assert_eq!(mission.title, "History Quiz");
        assert_eq!(mission.questions.len(), 3);
    }

    #[tokio::test]
    async fn instructional_kinds_have_no_questions() {
        for kind in [MissionKind::Creative, MissionKind::Logic, MissionKind::Offline] {
            let mission = StaticProvider::new()
                .request_mission(kind, None)
                .await
                .unwrap();
            assert!(mission.questions.is_empty(), "{kind} should be instructional");
        }
    }
}

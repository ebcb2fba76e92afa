//! Gemini generateContent provider.
//!
//! Sends a structured-output prompt to the hosted Gemini API and parses
//! the returned quiz JSON into a [`Mission`]. The base URL is
//! overridable so tests can point the client at a local mock server.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::ProviderError;
use crate::mission::{Mission, MissionKind, Question};
use crate::provider::MissionProvider;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

/// Mission payload as the model returns it (camelCase keys, no id/kind).
#[derive(Debug, Deserialize)]
struct MissionPayload {
    title: String,
    description: String,
    #[serde(default)]
    questions: Vec<QuestionPayload>,
    #[serde(rename = "rewardMinutes")]
    reward_minutes: u32,
}

#[derive(Debug, Deserialize)]
struct QuestionPayload {
    question: String,
    options: Vec<String>,
    #[serde(rename = "correctIndex")]
    correct_index: usize,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn prompt_for(kind: MissionKind, subject: Option<&str>) -> String {
        let subject_context = subject
            .map(|s| format!(" on the subject: {s}"))
            .unwrap_or_default();
        let difficulty = if kind.is_daily() {
            "slightly elevated"
        } else {
            "medium"
        };
        format!(
            "Generate an educational mission for a 10-12 year old child, \
             of type: {kind}{subject_context}. Difficulty level: {difficulty}. \
             If it is a quiz (or daily), provide {count} questions with answer options. \
             For 'daily', mix questions from logic, science and world trivia. \
             If it is creative writing or offline, provide an instruction instead.",
            count = kind.question_count().max(3),
        )
    }

    fn request_body(kind: MissionKind, subject: Option<&str>) -> serde_json::Value {
        json!({
            "contents": [{
                "parts": [{ "text": Self::prompt_for(kind, subject) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "questions": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "question": { "type": "STRING" },
                                    "options": { "type": "ARRAY", "items": { "type": "STRING" } },
                                    "correctIndex": { "type": "NUMBER" }
                                },
                                "required": ["question", "options", "correctIndex"]
                            }
                        },
                        "rewardMinutes": { "type": "NUMBER" }
                    },
                    "required": ["title", "description", "rewardMinutes"]
                }
            }
        })
    }

    /// Extract and parse the mission JSON from a generateContent response.
    /// The model sometimes wraps the payload in ```json fences.
    fn parse_response(kind: MissionKind, body: &serde_json::Value) -> Result<Mission, ProviderError> {
        let text = body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                ProviderError::MalformedResponse("no text part in first candidate".to_string())
            })?;

        let cleaned = text.replace("```json", "").replace("```", "");
        let payload: MissionPayload = serde_json::from_str(cleaned.trim())?;

        let questions: Vec<Question> = payload
            .questions
            .into_iter()
            .map(|q| Question {
                question: q.question,
                options: q.options,
                correct_index: q.correct_index,
            })
            .collect();

        if let Some(bad) = questions
            .iter()
            .find(|q| q.correct_index >= q.options.len())
        {
            return Err(ProviderError::MalformedResponse(format!(
                "correctIndex {} out of range for {} options",
                bad.correct_index,
                bad.options.len()
            )));
        }

        Ok(Mission {
            id: Uuid::new_v4().to_string(),
            kind,
            title: payload.title,
            description: payload.description,
            questions,
            reward_minutes: payload.reward_minutes,
        })
    }
}

#[async_trait]
impl MissionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn request_mission(
        &self,
        kind: MissionKind,
        subject: Option<&str>,
    ) -> Result<Mission, ProviderError> {
        if !self.is_configured() {
            return Err(ProviderError::NotConfigured);
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&Self::request_body(kind, subject))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let body: serde_json::Value = resp.json().await?;
        Self::parse_response(kind, &body)
    }
}

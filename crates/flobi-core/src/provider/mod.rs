//! Mission content provider boundary.
//!
//! The engine asks a [`MissionProvider`] for mission content when the
//! child starts a quiz or the daily mission. Providers may fail; the
//! engine absorbs any error and serves [`fallback_mission`] instead, so
//! the rest of the system never observes a provider error.

pub mod gemini;
pub mod stub;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::mission::{Mission, MissionKind};

pub use gemini::GeminiProvider;
pub use stub::StaticProvider;

/// External collaborator that produces mission content.
///
/// One outstanding request at a time; no retry policy. Callers that
/// must not fail (the engine) wrap errors with the fallback mission.
#[async_trait]
pub trait MissionProvider: Send + Sync {
    /// Unique identifier (e.g. "gemini", "static").
    fn name(&self) -> &str;

    /// Generate a mission of the given kind, optionally scoped to a
    /// school subject.
    async fn request_mission(
        &self,
        kind: MissionKind,
        subject: Option<&str>,
    ) -> Result<Mission, ProviderError>;
}

/// The canned mission served when content retrieval or parsing fails.
pub fn fallback_mission() -> Mission {
    Mission::new(
        MissionKind::Logic,
        "Quick Mind Workout",
        "The AI is resting, but you don't have to! Solve this: \
         name 5 words that start with the first letter of your name.",
        10,
    )
}

use std::str::FromStr;

use clap::Subcommand;
use flobi_core::{Config, GardenEngine, GeminiProvider, MissionKind, MissionProvider, StaticProvider};

#[derive(Subcommand)]
pub enum MissionAction {
    /// Generate mission content and print it as JSON
    Generate {
        /// Mission kind: quiz, logic, language, creative, offline, daily
        #[arg(long)]
        kind: String,
        /// Optional quiz subject (e.g. "Mathematics")
        #[arg(long)]
        subject: Option<String>,
        /// Use the offline static provider even if an API key is set
        #[arg(long)]
        offline: bool,
    },
}

/// Pick the provider configured credentials allow. Without an API key
/// (or with --offline) missions come from the deterministic static set.
pub fn select_provider(config: &Config, force_offline: bool) -> Box<dyn MissionProvider> {
    if force_offline || config.provider.api_key.is_empty() {
        Box::new(StaticProvider::new())
    } else {
        let mut provider = GeminiProvider::new(
            config.provider.api_key.clone(),
            config.provider.model.clone(),
        );
        if let Some(base_url) = &config.provider.base_url {
            provider = provider.with_base_url(base_url.clone());
        }
        Box::new(provider)
    }
}

pub fn run(action: MissionAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MissionAction::Generate {
            kind,
            subject,
            offline,
        } => {
            let kind = MissionKind::from_str(&kind)?;
            let config = Config::load()?;
            let provider = select_provider(&config, offline);

            // Route through the engine so provider failures surface as
            // the fallback mission, exactly as the app behaves.
            let mut engine = GardenEngine::default();
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(engine.start_mission(provider.as_ref(), kind, subject.as_deref()));

            let mission = engine
                .active_mission()
                .ok_or("mission generation produced nothing")?;
            println!("{}", serde_json::to_string_pretty(mission)?);
        }
    }
    Ok(())
}

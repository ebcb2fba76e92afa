use clap::Subcommand;
use flobi_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration (API key redacted)
    Show,
    /// Store the Gemini API key
    SetKey { key: String },
    /// Select the content model
    SetModel { model: String },
    /// Set the default pet name
    SetPetName { name: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let mut config = Config::load()?;
            if !config.provider.api_key.is_empty() {
                config.provider.api_key = "(set)".to_string();
            }
            println!("{}", toml::to_string_pretty(&config)?);
            println!("# {}", Config::config_path()?.display());
        }
        ConfigAction::SetKey { key } => {
            let mut config = Config::load()?;
            config.provider.api_key = key;
            config.save()?;
            println!("API key stored.");
        }
        ConfigAction::SetModel { model } => {
            let mut config = Config::load()?;
            config.provider.model = model;
            config.save()?;
            println!("Model updated.");
        }
        ConfigAction::SetPetName { name } => {
            let trimmed = name.trim();
            let len = trimmed.chars().count();
            if len == 0 || len > 12 {
                return Err("pet name must be 1-12 characters".into());
            }
            let mut config = Config::load()?;
            config.garden.pet_name = trimmed.to_string();
            config.save()?;
            println!("Pet name set to {trimmed}.");
        }
    }
    Ok(())
}

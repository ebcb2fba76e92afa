use clap::Subcommand;
use flobi_core::catalog;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Offline challenges the child can pick
    Offline,
    /// Evolution shop stock
    Shop,
    /// Quiz subjects
    Subjects,
    /// Weekly goal templates for parents
    Goals,
    /// Parent coach signals
    Signals,
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    let json = match action {
        CatalogAction::Offline => serde_json::to_string_pretty(&catalog::offline_challenges())?,
        CatalogAction::Shop => serde_json::to_string_pretty(&catalog::shop_items())?,
        CatalogAction::Subjects => serde_json::to_string_pretty(&catalog::subjects())?,
        CatalogAction::Goals => serde_json::to_string_pretty(&catalog::goal_templates())?,
        CatalogAction::Signals => serde_json::to_string_pretty(&catalog::coach_signals())?,
    };
    println!("{json}");
    Ok(())
}

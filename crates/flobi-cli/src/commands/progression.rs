use flobi_core::progression::{progression_for, XP_PER_LEVEL};

pub fn run(xp: u32) -> Result<(), Box<dyn std::error::Error>> {
    let prog = progression_for(xp);
    let next_level_at = (xp / XP_PER_LEVEL + 1) * XP_PER_LEVEL;
    let report = serde_json::json!({
        "xp": xp,
        "level": prog.level,
        "stage": prog.stage,
        "stage_name": prog.stage.display_name(),
        "stage_icon": prog.stage.icon(),
        "next_level_at": next_level_at,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

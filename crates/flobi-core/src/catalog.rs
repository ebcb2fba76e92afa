//! Fixed content catalogs.
//!
//! Offline challenges, shop stock, quiz subjects, weekly-goal templates
//! and parent coach signals are static data; nothing here is fetched or
//! persisted.

use serde::{Deserialize, Serialize};

use crate::goals::{GoalKind, GoalTemplate};
use crate::mission::OfflineChallenge;

/// Something the shop sells for dewdrops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub icon: String,
    /// Descriptive tag only; purchases just spend dewdrops.
    pub effect: ItemEffect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemEffect {
    Vitality,
    Xp,
    Cosmetic,
}

/// A school subject the child can pick for a knowledge quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// An observation surfaced on the parent's signals tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachSignal {
    pub title: String,
    pub description: String,
    pub status: String,
    pub category: SignalCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalCategory {
    Celebration,
    Suggestion,
    Insight,
}

fn challenge(id: &str, title: &str, description: &str, icon: &str) -> OfflineChallenge {
    OfflineChallenge {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        reward_text: "+15m Time | +5 Drops".to_string(),
    }
}

/// The fixed catalog of real-world challenges a child can pick.
pub fn offline_challenges() -> Vec<OfflineChallenge> {
    vec![
        challenge(
            "clean_room",
            "Librarian",
            "Tidy up your bookshelf or your desk.",
            "📚",
        ),
        challenge(
            "water_plants",
            "Home Gardener",
            "Water the plants in the whole house (don't forget the kitchen!).",
            "🪴",
        ),
        challenge(
            "help_kitchen",
            "Little Chef",
            "Help your parents prepare a healthy meal or a salad.",
            "🥗",
        ),
        challenge(
            "exercise",
            "Athlete",
            "Do a 15-minute workout or yoga session, or go for a brisk walk.",
            "🏃",
        ),
        challenge(
            "recycling",
            "Eco Guardian",
            "Sort the trash or take the bottles out for recycling.",
            "♻️",
        ),
    ]
}

/// Everything the evolution shop has in stock.
pub fn shop_items() -> Vec<ShopItem> {
    let item = |id: &str, name: &str, description: &str, price: u32, icon: &str, effect| ShopItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        icon: icon.to_string(),
        effect,
    };
    vec![
        item(
            "watering_can",
            "Golden Watering Can",
            "Restores your pet's energy to 100%!",
            10,
            "🚿",
            ItemEffect::Vitality,
        ),
        item(
            "fertilizer",
            "Super Fertilizer",
            "A one-time boost of +100 XP.",
            15,
            "🧪",
            ItemEffect::Xp,
        ),
        item(
            "rainbow_aura",
            "Rainbow Aura",
            "Your pet will shimmer in rainbow colors.",
            25,
            "🌈",
            ItemEffect::Cosmetic,
        ),
        item(
            "stone_pot",
            "Stone Pot",
            "An elegant pot that adds prestige.",
            40,
            "🏺",
            ItemEffect::Cosmetic,
        ),
    ]
}

/// Subjects offered by the quiz subject picker.
pub fn subjects() -> Vec<Subject> {
    let subject = |id: &str, name: &str, icon: &str| Subject {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    };
    vec![
        subject("math", "Mathematics", "🔢"),
        subject("nature", "Nature", "🌿"),
        subject("history", "History", "🏰"),
        subject("language_arts", "Language Arts", "📖"),
        subject("english", "English", "🇬🇧"),
        subject("logic", "Logic", "🧩"),
    ]
}

/// Weekly-goal templates the parent can propose.
pub fn goal_templates() -> Vec<GoalTemplate> {
    let template = |title: &str, description: &str, kind, target, reward: &str| GoalTemplate {
        title: title.to_string(),
        description: description.to_string(),
        kind,
        target,
        reward: reward.to_string(),
    };
    vec![
        template(
            "3 Offline Days",
            "No screen entertainment before 6 PM for 3 days.",
            GoalKind::Offline,
            3,
            "Ice cream outing",
        ),
        template(
            "5 Edu Missions",
            "Finish 5 extra knowledge missions this week.",
            GoalKind::Missions,
            5,
            "15 min of extra play",
        ),
        template(
            "Streak Scholar",
            "Keep the daily streak going 4 days in a row.",
            GoalKind::Streak,
            4,
            "Gold Badge",
        ),
        template(
            "Self-Stopper",
            "End screen time without a reminder 5 times.",
            GoalKind::Streak,
            5,
            "Board game night",
        ),
    ]
}

/// Behavior observations shown on the parent signals tab.
pub fn coach_signals() -> Vec<CoachSignal> {
    let signal = |title: &str, description: &str, status: &str, category| CoachSignal {
        title: title.to_string(),
        description: description.to_string(),
        status: status.to_string(),
        category,
    };
    vec![
        signal(
            "Resilience to mistakes",
            "Retried a difficult quiz three times until it was solved. High determination.",
            "High",
            SignalCategory::Celebration,
        ),
        signal(
            "Topic exploration",
            "Often picks new subjects instead of repeating favorites. Strong curiosity.",
            "Active",
            SignalCategory::Insight,
        ),
        signal(
            "Self-regulation habit",
            "Ends play before the hard time cutoff in 80% of cases.",
            "Stable",
            SignalCategory::Suggestion,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_expected_sizes() {
        assert_eq!(offline_challenges().len(), 5);
        assert_eq!(shop_items().len(), 4);
        assert_eq!(subjects().len(), 6);
        assert_eq!(goal_templates().len(), 4);
        assert_eq!(coach_signals().len(), 3);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let items = shop_items();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
        let challenges = offline_challenges();
        for (i, a) in challenges.iter().enumerate() {
            for b in &challenges[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn shop_prices_match_stock() {
        let prices: Vec<u32> = shop_items().iter().map(|i| i.price).collect();
        assert_eq!(prices, vec![10, 15, 25, 40]);
    }
}

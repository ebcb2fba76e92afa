//! Growth progression calculator.
//!
//! Maps accumulated experience to a level and a plant growth stage.
//! `xp` is the single authoritative value; level and stage are pure
//! projections recomputed on demand, never stored state that could
//! drift out of sync.

use serde::{Deserialize, Serialize};

/// Experience required per level.
pub const XP_PER_LEVEL: u32 = 500;

/// Plant lifecycle stages, in growth order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStage {
    Seed,
    Sprout,
    Leaves,
    Bush,
    Tree,
    Bloom,
    Fruit,
}

/// Stage cutoffs, ascending. A stage is reached once xp meets its threshold.
pub const STAGE_THRESHOLDS: [(u32, GrowthStage); 7] = [
    (0, GrowthStage::Seed),
    (100, GrowthStage::Sprout),
    (300, GrowthStage::Leaves),
    (600, GrowthStage::Bush),
    (1000, GrowthStage::Tree),
    (1500, GrowthStage::Bloom),
    (2100, GrowthStage::Fruit),
];

impl GrowthStage {
    /// Human-readable stage name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GrowthStage::Seed => "Seed",
            GrowthStage::Sprout => "Sprout",
            GrowthStage::Leaves => "Leaves",
            GrowthStage::Bush => "Bush",
            GrowthStage::Tree => "Tree",
            GrowthStage::Bloom => "Bloom",
            GrowthStage::Fruit => "Fruit",
        }
    }

    /// Emoji used wherever the stage is rendered.
    pub fn icon(&self) -> &'static str {
        match self {
            GrowthStage::Seed => "🌱",
            GrowthStage::Sprout => "🌿",
            GrowthStage::Leaves => "🍀",
            GrowthStage::Bush => "🌳",
            GrowthStage::Tree => "🌲",
            GrowthStage::Bloom => "🌸",
            GrowthStage::Fruit => "🍎",
        }
    }

    /// The xp threshold at which this stage is reached.
    pub fn threshold(&self) -> u32 {
        STAGE_THRESHOLDS
            .iter()
            .find(|(_, s)| s == self)
            .map(|(t, _)| *t)
            .unwrap_or(0)
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Level and stage derived from an xp value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    pub level: u32,
    pub stage: GrowthStage,
}

/// Compute level and growth stage for an xp value.
///
/// Total over all `u32` inputs: `level = xp / 500 + 1`, stage selected
/// by the highest threshold the xp value meets.
pub fn progression_for(xp: u32) -> Progression {
    let stage = STAGE_THRESHOLDS
        .iter()
        .rev()
        .find(|(threshold, _)| xp >= *threshold)
        .map(|(_, stage)| *stage)
        .unwrap_or(GrowthStage::Seed);

    Progression {
        level: xp / XP_PER_LEVEL + 1,
        stage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn level_formula() {
        assert_eq!(progression_for(0).level, 1);
        assert_eq!(progression_for(499).level, 1);
        assert_eq!(progression_for(500).level, 2);
        assert_eq!(progression_for(2100).level, 5);
    }

    #[test]
    fn stage_boundaries() {
        let expected = [
            (0, GrowthStage::Seed),
            (99, GrowthStage::Seed),
            (100, GrowthStage::Sprout),
            (299, GrowthStage::Sprout),
            (300, GrowthStage::Leaves),
            (599, GrowthStage::Leaves),
            (600, GrowthStage::Bush),
            (999, GrowthStage::Bush),
            (1000, GrowthStage::Tree),
            (1499, GrowthStage::Tree),
            (1500, GrowthStage::Bloom),
            (2099, GrowthStage::Bloom),
            (2100, GrowthStage::Fruit),
        ];
        for (xp, stage) in expected {
            assert_eq!(progression_for(xp).stage, stage, "xp = {xp}");
        }
    }

    #[test]
    fn stage_threshold_lookup() {
        assert_eq!(GrowthStage::Seed.threshold(), 0);
        assert_eq!(GrowthStage::Bush.threshold(), 600);
        assert_eq!(GrowthStage::Fruit.threshold(), 2100);
    }

    proptest! {
        #[test]
        fn level_matches_formula(xp in 0u32..1_000_000) {
            prop_assert_eq!(progression_for(xp).level, xp / XP_PER_LEVEL + 1);
        }

        #[test]
        fn stage_never_decreases(xp in 0u32..10_000, delta in 0u32..5_000) {
            let before = progression_for(xp);
            let after = progression_for(xp + delta);
            prop_assert!(after.stage >= before.stage);
            prop_assert!(after.level >= before.level);
        }
    }
}

//! Score-to-sign mapping and the cosmetic readings derived from a profile.

use serde::{Deserialize, Serialize};

use crate::types::WalletProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacSign {
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    /// Inclusive on both ends
    pub score_range: (u32, u32),
}

impl ZodiacSign {
    pub fn contains(&self, score: u32) -> bool {
        score >= self.score_range.0 && score <= self.score_range.1
    }

    /// `emoji name`, the form shown to users and prompts
    pub fn display_name(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}

/// Seven bands, low to high, partitioning [0, 100]
pub const ONCHAIN_ZODIACS: [ZodiacSign; 7] = [
    ZodiacSign {
        name: "SlowpokeLibra",
        emoji: "🐌",
        description: "Just set up wallet. Harmony-seeking. Probably still on Coinbase.",
        score_range: (0, 9),
    },
    ZodiacSign {
        name: "ChartistVirgo",
        emoji: "📊",
        description: "Studies every chart, rarely apes. Perfectionist, probably ngmi.",
        score_range: (10, 19),
    },
    ZodiacSign {
        name: "LionLeo",
        emoji: "🦁",
        description: "Proud hodler. Loud in Discord, quiet in wallet activity.",
        score_range: (20, 34),
    },
    ZodiacSign {
        name: "CrabCancer",
        emoji: "🦀",
        description: "Sideways trader. Buys high, sells low, blames market conditions.",
        score_range: (35, 49),
    },
    ZodiacSign {
        name: "MoonboyGemini",
        emoji: "🌙",
        description: "Chases every airdrop. Dual nature: sometimes alpha, sometimes rekt.",
        score_range: (50, 64),
    },
    ZodiacSign {
        name: "DiamondTaurus",
        emoji: "💎",
        description: "Diamond hands incarnate. Mints NFTs, holds through rugs, unshakeable.",
        score_range: (65, 79),
    },
    ZodiacSign {
        name: "DegenerateAries",
        emoji: "🔥",
        description: "The eternal degen. Swaps at 3am, never sleeps, portfolio on fire (literally).",
        score_range: (80, 100),
    },
];

/// First band containing the score; the lowest band otherwise.
pub fn map_score(score: u32) -> &'static ZodiacSign {
    ONCHAIN_ZODIACS
        .iter()
        .find(|z| z.contains(score))
        .unwrap_or(&ONCHAIN_ZODIACS[0])
}

/// Fixed sign pairing: (sign, compatible sign, description)
const BUILDER_COMPATIBILITY: [(&str, &str, &str); 7] = [
    ("DegenerateAries", "ChartistVirgo", "Chaos meets meticulous. Somehow it works."),
    ("DiamondTaurus", "DegenerateAries", "Both deploy under pressure. Perfect chaos."),
    ("MoonboyGemini", "SlowpokeLibra", "Infinite vibes, zero deadlines."),
    ("CrabCancer", "LionLeo", "Loud meets cautious. Balance emerges."),
    ("LionLeo", "ChartistVirgo", "Loud meets meticulous. Somehow it works."),
    ("ChartistVirgo", "DegenerateAries", "Analysis meets action. Ship faster."),
    ("SlowpokeLibra", "MoonboyGemini", "Patient meets enthusiastic. Learning happens."),
];

/// Compatibility text for a sign name, with or without its emoji prefix.
pub fn builder_compatibility(zodiac_name: &str) -> String {
    let base_sign = match zodiac_name.split_once(' ') {
        Some((_, rest)) => rest,
        None => zodiac_name,
    };

    BUILDER_COMPATIBILITY
        .iter()
        .find(|(sign, _, _)| *sign == base_sign)
        .map(|(_, compatible, description)| format!("Compatible with {}: {}", compatible, description))
        .unwrap_or_else(|| "Compatible with all builders who ship.".to_string())
}

/// Keywords from independent threshold checks; several may apply at once.
pub fn cosmic_keywords(swap_count: u64, mint_count: u64, transfer_count: u64) -> Vec<&'static str> {
    let mut keywords = Vec::new();

    if swap_count > 5 {
        keywords.push("Mercury Retrograde Alert");
    }
    if swap_count > 3 {
        keywords.push("Moon in Swap Position");
    }
    if mint_count > 3 {
        keywords.push("Jupiter Blessing");
    }
    if mint_count == 0 {
        keywords.push("Saturn Caution");
    }
    if transfer_count > 5 {
        keywords.push("Venus in Motion");
    }
    if swap_count == 0 && mint_count == 0 {
        keywords.push("Cosmic Dormancy");
    }

    if keywords.is_empty() {
        keywords.push("Neutral Alignment");
    }
    keywords
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GasEnergy {
    #[serde(rename = "LOW GAS")]
    Low,
    #[serde(rename = "MEDIUM GAS")]
    Medium,
    #[serde(rename = "HIGH GAS")]
    High,
}

impl GasEnergy {
    /// HIGH above 5 tx/day or 500k average gas, MEDIUM above 1 tx/day or
    /// 200k average gas, LOW otherwise
    pub fn classify(activity_rate: f64, avg_gas: f64) -> Self {
        if activity_rate > 5.0 || avg_gas > 500_000.0 {
            GasEnergy::High
        } else if activity_rate > 1.0 || avg_gas > 200_000.0 {
            GasEnergy::Medium
        } else {
            GasEnergy::Low
        }
    }

    pub fn from_profile(profile: &WalletProfile) -> Self {
        // A same-day account counts as one day old
        let age = profile.account_age_days.max(1) as f64;
        let activity_rate = profile.lifetime_tx_count as f64 / age;
        let avg_gas = if profile.total_tx_count == 0 {
            0.0
        } else {
            profile.total_gas_spent() as f64 / profile.total_tx_count as f64
        };
        Self::classify(activity_rate, avg_gas)
    }

    pub fn label(&self) -> &'static str {
        match self {
            GasEnergy::Low => "LOW GAS",
            GasEnergy::Medium => "MEDIUM GAS",
            GasEnergy::High => "HIGH GAS",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            GasEnergy::Low => "The cosmos is giving you clearance. Move fast.",
            GasEnergy::Medium => "Balance. Deploy if it feels right.",
            GasEnergy::High => "The universe is testing conviction. Builders only.",
        }
    }
}

const LUCKY_ADDRESSES: [&str; 5] = [
    "0x000000000000000000000000000000000000base",
    "0x1111111111111111111111111111111111111111",
    "0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef",
    "0xcafebabecafebabecafebabecafebabecafebabe",
    "0x8453845384538453845384538453845384538453",
];

pub const LUCKY_ADDRESS_MESSAGE: &str = "Don't send ETH. Just stare at it for motivation.";

pub fn lucky_contract_address(degen_score: u32) -> &'static str {
    LUCKY_ADDRESSES[(degen_score / 20) as usize % LUCKY_ADDRESSES.len()]
}

/// Everything cosmetic derived from a finished profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZodiacReading {
    pub sign: ZodiacSign,
    pub compatibility: String,
    pub gas_energy: GasEnergy,
    pub gas_energy_message: &'static str,
    pub cosmic_keywords: Vec<&'static str>,
    pub lucky_contract: &'static str,
    pub lucky_contract_message: &'static str,
}

impl ZodiacReading {
    pub fn from_profile(profile: &WalletProfile) -> Self {
        let sign = *map_score(profile.degen_score);
        let gas_energy = GasEnergy::from_profile(profile);

        Self {
            compatibility: builder_compatibility(sign.name),
            gas_energy,
            gas_energy_message: gas_energy.message(),
            cosmic_keywords: cosmic_keywords(
                profile.total_swap_count,
                profile.total_mint_count,
                profile.total_transfer_count,
            ),
            lucky_contract: lucky_contract_address(profile.degen_score),
            lucky_contract_message: LUCKY_ADDRESS_MESSAGE,
            sign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_score_maps_to_exactly_one_band() {
        for score in 0..=100 {
            let matches = ONCHAIN_ZODIACS.iter().filter(|z| z.contains(score)).count();
            assert_eq!(matches, 1, "score {} matched {} bands", score, matches);
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(map_score(0).name, "SlowpokeLibra");
        assert_eq!(map_score(9).name, "SlowpokeLibra");
        assert_eq!(map_score(10).name, "ChartistVirgo");
        assert_eq!(map_score(19).name, "ChartistVirgo");
        assert_eq!(map_score(20).name, "LionLeo");
        assert_eq!(map_score(35).name, "CrabCancer");
        assert_eq!(map_score(50).name, "MoonboyGemini");
        assert_eq!(map_score(65).name, "DiamondTaurus");
        assert_eq!(map_score(79).name, "DiamondTaurus");
        assert_eq!(map_score(80).name, "DegenerateAries");
        assert_eq!(map_score(100).name, "DegenerateAries");
    }

    #[test]
    fn test_out_of_range_falls_back_to_lowest() {
        assert_eq!(map_score(101).name, "SlowpokeLibra");
        assert_eq!(map_score(u32::MAX).name, "SlowpokeLibra");
    }

    #[test]
    fn test_compatibility_strips_emoji_prefix() {
        assert_eq!(
            builder_compatibility("🔥 DegenerateAries"),
            "Compatible with ChartistVirgo: Chaos meets meticulous. Somehow it works."
        );
        assert_eq!(
            builder_compatibility("CrabCancer"),
            "Compatible with LionLeo: Loud meets cautious. Balance emerges."
        );
        assert_eq!(
            builder_compatibility("Ophiuchus"),
            "Compatible with all builders who ship."
        );
    }

    #[test]
    fn test_cosmic_keywords_are_independent() {
        assert_eq!(
            cosmic_keywords(6, 0, 0),
            vec!["Mercury Retrograde Alert", "Moon in Swap Position", "Saturn Caution"]
        );
        assert_eq!(
            cosmic_keywords(0, 0, 6),
            vec!["Saturn Caution", "Venus in Motion", "Cosmic Dormancy"]
        );
        assert_eq!(cosmic_keywords(4, 4, 0), vec!["Moon in Swap Position", "Jupiter Blessing"]);
        assert_eq!(cosmic_keywords(1, 1, 1), vec!["Neutral Alignment"]);
    }

    #[test]
    fn test_gas_energy_tiers() {
        assert_eq!(GasEnergy::classify(5.5, 0.0), GasEnergy::High);
        assert_eq!(GasEnergy::classify(0.0, 600_000.0), GasEnergy::High);
        assert_eq!(GasEnergy::classify(5.0, 0.0), GasEnergy::Medium);
        assert_eq!(GasEnergy::classify(0.5, 250_000.0), GasEnergy::Medium);
        assert_eq!(GasEnergy::classify(1.0, 200_000.0), GasEnergy::Low);
        assert_eq!(GasEnergy::Low.label(), "LOW GAS");
    }

    #[test]
    fn test_lucky_contract_rotates_by_score() {
        assert_eq!(lucky_contract_address(0), LUCKY_ADDRESSES[0]);
        assert_eq!(lucky_contract_address(19), LUCKY_ADDRESSES[0]);
        assert_eq!(lucky_contract_address(45), LUCKY_ADDRESSES[2]);
        assert_eq!(lucky_contract_address(100), LUCKY_ADDRESSES[0]);
    }
}

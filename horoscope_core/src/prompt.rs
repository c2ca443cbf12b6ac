use async_trait::async_trait;
use serde::Serialize;

use crate::types::WalletProfile;
use crate::zodiac::map_score;
use crate::Result;

pub const SYSTEM_PROMPT: &str = "You are a mystical astrologer who interprets multi-chain blockchain activity as cosmic signs. Be funny, concise, and compare behavior across different chains.";

/// Returned when the model answers with nothing
pub const FALLBACK_HOROSCOPE: &str = "The stars are cloudy today. Try again later, anon.";

/// Text-generation collaborator turning a rendered prompt into a horoscope
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, prompt: &HoroscopePrompt) -> Result<String>;
}

/// Rendered prompt pair. Built only from aggregate fields, never from raw
/// transaction contents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoroscopePrompt {
    pub system: String,
    pub user: String,
}

impl HoroscopePrompt {
    pub fn from_profile(profile: &WalletProfile) -> Self {
        let sign = map_score(profile.degen_score);

        let chain_summaries = profile
            .active_chains()
            .map(|c| c.summary_line())
            .collect::<Vec<_>>()
            .join("\n- ");
        let chain_summaries = if chain_summaries.is_empty() {
            "No recent activity detected".to_string()
        } else {
            chain_summaries
        };

        let user = format!(
            r#"You are a mystical onchain astrology guru who reads blockchain transactions like star charts.

Analyze this wallet's MULTI-CHAIN onchain activity and return a short, funny, cosmic horoscope about their degen behavior.

IMPORTANT: Compare their behavior across chains. Do they favor one chain over another? Are they a Base degen or Ethereum maxi? Do they bridge-hop?

Wallet Stats:
- Address: {address}
- Most Active Chain: {most_active}
- Onchain Zodiac: {sign}
- Degen Score: {score}/100

Activity by Chain:
- {chain_summaries}

Total Activity:
- Transactions: {tx}
- Swaps: {swaps}
- Mints: {mints}
- Transfers: {transfers}

Style requirements:
- 3-4 sentences maximum
- Compare their behavior across chains (e.g., "Your Base moon shines bright while Ethereum sleeps")
- Mix astrology terms (Mercury retrograde, moon phases, cosmic alignment) with crypto slang (ape, rug, diamond hands, ngmi, wagmi)
- Reference their most active chain
- Be witty and playful, not mean
- End with encouragement or a playful warning

Example formats:
- "Your Base moon shines bold, swapping $DEGEN under retrograde again? Meanwhile your Ethereum sun stays dormant. Balance your cosmic gas fees, anon."
- "The charts reveal a true multi-chain degen! Your {most_active} energy dominates, but Saturn warns: not every chain is alpha. DYOR."

Generate the horoscope now:"#,
            address = profile.short_address(),
            most_active = profile.most_active_chain,
            sign = sign.display_name(),
            score = profile.degen_score,
            chain_summaries = chain_summaries,
            tx = profile.total_tx_count,
            swaps = profile.total_swap_count,
            mints = profile.total_mint_count,
            transfers = profile.total_transfer_count,
        );

        Self {
            system: SYSTEM_PROMPT.to_string(),
            user,
        }
    }
}

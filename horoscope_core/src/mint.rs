use base64::{engine::general_purpose, Engine as _};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::Result;

pub const ORACLE_IMAGE_URL: &str = "https://onchainguru.vercel.app/oracle-wizard.png";
pub const ORACLE_EXTERNAL_URL: &str = "https://onchainguru.vercel.app";

/// Data needed to prepare a horoscope NFT
/// Every field defaults so an incomplete body reaches `is_complete`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MintRequest {
    pub address: String,
    pub sign: String,
    pub prophecy: String,
    pub degen_score: u32,
    pub lifetime_tx_count: u64,
    pub most_active_chain: String,
}

impl MintRequest {
    /// Address, sign and prophecy must all be present
    pub fn is_complete(&self) -> bool {
        !self.address.trim().is_empty()
            && !self.sign.trim().is_empty()
            && !self.prophecy.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MintAttribute {
    pub trait_type: String,
    pub value: Value,
}

/// ERC-721 style metadata document for a minted horoscope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MintMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<MintAttribute>,
    pub external_url: String,
}

impl MintMetadata {
    pub fn from_request(request: &MintRequest, date: NaiveDate) -> Self {
        let attribute = |trait_type: &str, value: Value| MintAttribute {
            trait_type: trait_type.to_string(),
            value,
        };

        Self {
            name: format!("Proof of Fate - {}", request.sign),
            description: request.prophecy.clone(),
            image: ORACLE_IMAGE_URL.to_string(),
            attributes: vec![
                attribute("Zodiac Sign", json!(request.sign)),
                attribute("Degen Score", json!(request.degen_score)),
                attribute("Lifetime Transactions", json!(request.lifetime_tx_count)),
                attribute("Most Active Chain", json!(request.most_active_chain)),
                attribute("Date", json!(date.format("%Y-%m-%d").to_string())),
            ],
            external_url: ORACLE_EXTERNAL_URL.to_string(),
        }
    }

    /// Self-contained token URI, used when no pinning service is configured
    pub fn data_uri(&self) -> Result<String> {
        let body = serde_json::to_vec(self)?;
        Ok(format!(
            "data:application/json;base64,{}",
            general_purpose::STANDARD.encode(body)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> MintRequest {
        MintRequest {
            address: "0x742d35cc6131b2f6e7f4c3b5e8a8c8d8f0b4c4e3".to_string(),
            sign: "🦀 CrabCancer".to_string(),
            prophecy: "Sideways again, anon.".to_string(),
            degen_score: 42,
            lifetime_tx_count: 310,
            most_active_chain: "Base".to_string(),
        }
    }

    #[test]
    fn test_metadata_attributes() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        let metadata = MintMetadata::from_request(&request(), date);

        assert_eq!(metadata.name, "Proof of Fate - 🦀 CrabCancer");
        assert_eq!(metadata.description, "Sideways again, anon.");
        assert_eq!(metadata.attributes.len(), 5);
        assert_eq!(metadata.attributes[1].value, json!(42));
        assert_eq!(metadata.attributes[4].value, json!("2025-02-14"));
    }

    #[test]
    fn test_data_uri_decodes_back_to_metadata() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        let metadata = MintMetadata::from_request(&request(), date);
        let uri = metadata.data_uri().unwrap();

        let encoded = uri.strip_prefix("data:application/json;base64,").unwrap();
        let decoded = general_purpose::STANDARD.decode(encoded).unwrap();
        let parsed: MintMetadata = serde_json::from_slice(&decoded).unwrap();
        assert_eq!(parsed, metadata);
    }

    #[test]
    fn test_incomplete_request() {
        let mut req = request();
        assert!(req.is_complete());
        req.prophecy = "  ".to_string();
        assert!(!req.is_complete());
    }

    #[test]
    fn test_request_accepts_camel_case_payload() {
        let req: MintRequest = serde_json::from_str(
            r#"{"address":"0xabc","sign":"LionLeo","prophecy":"Roar","degenScore":25,"lifetimeTxCount":12,"mostActiveChain":"Ethereum"}"#,
        )
        .unwrap();
        assert_eq!(req.degen_score, 25);
        assert_eq!(req.most_active_chain, "Ethereum");
    }
}

use crate::{CoreError, Result};

/// Basic EVM address check: `0x` followed by 40 hex characters
pub fn validate_wallet_address(address: &str) -> Result<()> {
    let valid = address.len() == 42
        && address.starts_with("0x")
        && address[2..].chars().all(|c| c.is_ascii_hexdigit());

    if !valid {
        return Err(CoreError::InvalidAddress(address.to_string()));
    }
    Ok(())
}

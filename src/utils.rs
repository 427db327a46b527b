// Utility modules

use crate::error::{AppError, Result};

/// Trims and uppercases a currency symbol, rejecting anything that is not
/// plain alphanumeric ticker text.
pub fn normalize_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim().to_ascii_uppercase();

    if symbol.is_empty()
        || symbol.len() > 10
        || !symbol.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(AppError::BadRequest(format!(
            "invalid currency symbol: {:?}",
            raw
        )));
    }

    Ok(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_symbol_uppercases_and_trims() {
        assert_eq!(normalize_symbol(" eth ").expect("valid symbol"), "ETH");
        assert_eq!(normalize_symbol("usd").expect("valid symbol"), "USD");
    }

    #[test]
    fn normalize_symbol_rejects_junk() {
        assert!(normalize_symbol("").is_err());
        assert!(normalize_symbol("   ").is_err());
        assert!(normalize_symbol("ET-H").is_err());
        assert!(normalize_symbol("VERYLONGSYMBOL").is_err());
    }
}

/// Application constants

// Display icons (LaMetric ids: "iXXX" static, "aXXXX" animated)
pub const ICON_BITCOIN: &str = "i10814";
pub const ICON_DOGE: &str = "a12356";

// History window: one point per day, "yesterday" back to 14 days ago
pub const HISTORY_DAYS: usize = 14;

// Sparkline target height in device pixels
pub const GRAPH_SCALE: u32 = 16;

// Quote source
pub const DEFAULT_QUOTE_API_URL: &str = "https://min-api.cryptocompare.com/data";

// Spot price cache delay in minutes
pub const DEFAULT_PRICE_DELAY_MINUTES: i64 = 3;

// Device notification port (4343 is the TLS port, 8080 the insecure one)
pub const DEFAULT_DEVICE_PORT: u16 = 4343;

// Outbound HTTP timeouts
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 4;
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 10;

// API version
pub const API_VERSION: &str = "v1";

/// Icon shown next to the base currency on the device.
pub fn icon_for_base(base: &str) -> &'static str {
    match base {
        "BTC" | "BCH" => ICON_BITCOIN,
        _ => ICON_DOGE,
    }
}

/// Currency suffix appended to the price text.
pub fn symbol_for_quote(quote: &str) -> &'static str {
    match quote {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitcoin_variants_share_the_bitcoin_icon() {
        assert_eq!(icon_for_base("BTC"), ICON_BITCOIN);
        assert_eq!(icon_for_base("BCH"), ICON_BITCOIN);
        assert_eq!(icon_for_base("ETH"), ICON_DOGE);
        assert_eq!(icon_for_base("DOGE"), ICON_DOGE);
    }

    #[test]
    fn known_quote_currencies_map_to_symbols() {
        assert_eq!(symbol_for_quote("USD"), "$");
        assert_eq!(symbol_for_quote("EUR"), "€");
        assert_eq!(symbol_for_quote("GBP"), "£");
        assert_eq!(symbol_for_quote("JPY"), "");
    }
}

//! # Config Commands
//!
//! Commands for retrieving storefront configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current storefront configuration.
///
/// ## When Used
/// - App startup (store name in the header)
/// - Currency formatting on the client
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// Formats a cent amount with the configured currency, e.g. `$49.99`.
pub fn format_price(config: &ConfigState, cents: i64) -> String {
    config.format_currency(cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        let config = ConfigState {
            currency_symbol: "€".to_string(),
            ..ConfigState::default()
        };

        assert_eq!(format_price(&config, 7999), "€79.99");
        assert_eq!(get_config(&config), config);
    }
}

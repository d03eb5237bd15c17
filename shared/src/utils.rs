//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Provider and swap addresses come from several networks (bech32 on BTC,
//! hex on EVM chains) and are too long for narrow table columns:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with 4/4
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x3f5CE5FBFe3E9af3971dD833D26bA9b5C936f0bE";
//! assert_eq!(format_address(address, 6, 4), "0x3f5C...f0bE");
//! ```

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is not longer than `prefix_len + suffix_len`, it is returned as-is.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();

    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Format an address with default 4-character prefix and suffix.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(truncate_address("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh"), "bc1q...0wlh");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

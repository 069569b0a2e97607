//! Client configuration and documented request defaults.

pub const API_BASE_URL: &str = "https://api.isthereanydeal.com";

/// Two letter ISO 3166-1 country code used when a caller gives none.
pub const DEFAULT_COUNTRY: &str = "US";
pub const DEFAULT_OFFSET: u32 = 0;
pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_SEARCH_RESULTS: i32 = 20;
pub const DEFAULT_BUCKET_PRICE: u32 = 5;
pub const DEFAULT_BUCKET_CUT: u32 = 5;
/// Voucher-only prices are included unless the caller opts out.
pub const DEFAULT_VOUCHERS: bool = true;

/// Settings shared by every service of one client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Run `Validate` on every decoded response.
    pub validate: bool,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            validate: false,
        }
    }
}

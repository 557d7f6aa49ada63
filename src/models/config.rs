use serde::Deserialize;

fn default_currency() -> String {
    "RWF".to_string()
}

fn default_database_url() -> String {
    "storefront.db".to_string()
}

/// Configuration options for the storefront core.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path of the SQLite database backing the slot store.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Address orders are mailed to when the relay is unavailable.
    pub store_email: String,
    /// Phone number surfaced as manual fallback guidance.
    #[serde(default)]
    pub store_phone: Option<String>,
    /// Endpoint of the external email relay; absent means mailto fallback.
    #[serde(default)]
    pub relay_url: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl StoreConfig {
    /// Loads the configuration from a yaml file.
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?
            .try_deserialize()
    }
}

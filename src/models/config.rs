//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    pub secret: String,
    /// Trim whitespace around the owner last-name filter before querying.
    /// Off by default: the filter is passed through verbatim.
    #[serde(default)]
    pub trim_owner_search: bool,
}

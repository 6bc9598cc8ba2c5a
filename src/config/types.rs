// Configuration type definitions

use serde::Deserialize;

/// Suggestion endpoint URLs, one per form field
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EndpointsConfig {
    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub district: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

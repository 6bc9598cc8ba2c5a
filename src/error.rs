use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for typeahead
#[derive(Debug, Error)]
pub enum TypeaheadError {
    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("no suggestion endpoint configured for the {0} field (use --{0}-url or the config file)")]
    MissingEndpoint(String),

    #[error("could not read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

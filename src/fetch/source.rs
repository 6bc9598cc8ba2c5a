//! Suggestion sources
//!
//! A source resolves a query string to a list of suggestion texts. The
//! production implementation queries an HTTP endpoint; tests substitute
//! in-process fakes.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use thiserror::Error;

use crate::error::TypeaheadError;

/// Timeout for a single suggestion request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors from fetching suggestions
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("endpoint returned HTTP {0}")]
    Status(u16),

    #[error("invalid suggestion payload: {0}")]
    Parse(String),
}

/// Resolves a query to suggestion texts
pub trait SuggestSource {
    fn fetch(&self, query: &str) -> Result<Vec<String>, FetchError>;
}

/// HTTP suggestion source
///
/// Issues `GET <endpoint>?q=<query>` and expects a `200 OK` response whose
/// body is a JSON array of strings.
#[derive(Debug, Clone)]
pub struct HttpSuggestSource {
    endpoint: Url,
    client: Client,
}

impl HttpSuggestSource {
    /// Create a source for the given endpoint URL
    pub fn new(endpoint: &str) -> Result<Self, TypeaheadError> {
        let endpoint = Url::parse(endpoint).map_err(|e| TypeaheadError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TypeaheadError::HttpClient(e.to_string()))?;

        Ok(Self { endpoint, client })
    }

    /// Build the request URL with the query carried in the `q` parameter
    ///
    /// `query_pairs_mut` percent-encodes the value, so text containing `&`,
    /// `#`, or spaces survives intact.
    fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }
}

impl SuggestSource for HttpSuggestSource {
    fn fetch(&self, query: &str) -> Result<Vec<String>, FetchError> {
        let response = self
            .client
            .get(self.request_url(query))
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_suggestions(&body)
    }
}

/// Parse an endpoint response body as a JSON array of strings
pub fn parse_suggestions(body: &str) -> Result<Vec<String>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array_of_strings() {
        let items = parse_suggestions(r#"["Alpha","Beta"]"#).unwrap();
        assert_eq!(items, vec!["Alpha".to_string(), "Beta".to_string()]);
    }

    #[test]
    fn test_parse_empty_array() {
        let items = parse_suggestions("[]").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_suggestions(r#"{"items": []}"#);
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_mixed_array() {
        let result = parse_suggestions(r#"["Alpha", 42]"#);
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = parse_suggestions("not json");
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_parse_preserves_order() {
        let items = parse_suggestions(r#"["Zhytomyr","Kyiv","Lviv"]"#).unwrap();
        assert_eq!(items, vec!["Zhytomyr", "Kyiv", "Lviv"]);
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = HttpSuggestSource::new("not a url");
        assert!(matches!(
            result,
            Err(TypeaheadError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_request_url_appends_query_parameter() {
        let source = HttpSuggestSource::new("https://example.org/autocomplete/region/").unwrap();
        let url = source.request_url("Kyiv");
        assert_eq!(
            url.as_str(),
            "https://example.org/autocomplete/region/?q=Kyiv"
        );
    }

    #[test]
    fn test_request_url_encodes_special_characters() {
        let source = HttpSuggestSource::new("https://example.org/s/").unwrap();
        let url = source.request_url("a&b #c");
        assert_eq!(url.as_str(), "https://example.org/s/?q=a%26b+%23c");
    }

    #[test]
    fn test_request_url_keeps_existing_parameters() {
        let source = HttpSuggestSource::new("https://example.org/s/?kind=city").unwrap();
        let url = source.request_url("x");
        assert_eq!(url.as_str(), "https://example.org/s/?kind=city&q=x");
    }

    #[test]
    fn test_request_url_round_trips_decoded_value() {
        let source = HttpSuggestSource::new("https://example.org/s/").unwrap();
        let url = source.request_url("a&b #c");
        let (key, value) = url.query_pairs().last().unwrap();
        assert_eq!(key, "q");
        assert_eq!(value, "a&b #c");
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The storefront answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body is not valid JSON.
    #[error("JSON parse error for {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed JSON that lacks the fields a lookup needs.
    #[error("unexpected response shape: {reason}")]
    Schema { reason: String },
}

impl ScraperError {
    /// Whether a failed collection lookup may be retried as an item lookup.
    ///
    /// Only the storefront rejecting the endpoint or returning the wrong
    /// shape qualifies. Transport failures and unparseable bodies do not.
    #[must_use]
    pub fn allows_item_fallback(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Schema { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_schema_allow_item_fallback() {
        let status = ScraperError::Status {
            status: 404,
            url: "https://example.com/collections/x/products.json".to_string(),
        };
        let schema = ScraperError::Schema {
            reason: "missing products array".to_string(),
        };
        assert!(status.allows_item_fallback());
        assert!(schema.allows_item_fallback());
    }

    #[test]
    fn parse_errors_do_not_allow_item_fallback() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = ScraperError::Parse {
            context: "test".to_string(),
            source,
        };
        assert!(!err.allows_item_fallback());
    }

    #[test]
    fn status_error_message_names_status_and_url() {
        let err = ScraperError::Status {
            status: 404,
            url: "https://example.com/products/x.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected HTTP status 404 from https://example.com/products/x.json"
        );
    }
}

/// Failure reasons produced while serving a request.
///
/// None of these escape [`crate::adapter::PublicDataAdapter::handle`]; they are
/// turned into display text by [`crate::adapter::messages`].
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The raw request was not a JSON object of the expected shape
    #[error("malformed request: {0}")]
    MalformedRequest(#[source] serde_json::Error),

    /// The action is absent or not one of the known identifiers
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// A required parameter was absent or empty
    #[error("missing parameter `{0}`")]
    MissingParameter(&'static str),

    /// A digit-only identifier had the wrong length after normalization
    #[error("parameter `{param}` must contain {expected} digits")]
    InvalidDigits {
        param: &'static str,
        expected: usize,
    },

    /// Timeout, connection failure, non-2xx status or undecodable body
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The body decoded but did not carry a usable value
    #[error("{0}")]
    InvalidPayload(String),

    /// The provider answered 200 but flagged a logical error
    #[error("{provider} reported an error: {message}")]
    Provider {
        provider: &'static str,
        message: String,
    },

    /// Every company registry source failed
    #[error("all company registry sources are unavailable")]
    SourcesExhausted,

    /// The lookup ran but nothing matched
    #[error("no match for '{0}'")]
    NotFound(String),

    /// The provider returned an empty dataset where one was expected
    #[error("provider returned no data")]
    EmptyDataset,
}

impl QueryError {
    /// Whether the failure came from an upstream call rather than from the
    /// caller's input or an empty result.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            QueryError::Http(_)
                | QueryError::InvalidPayload(_)
                | QueryError::Provider { .. }
                | QueryError::SourcesExhausted
                | QueryError::EmptyDataset
        )
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("Search query must not be empty")]
    EmptyQuery,
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("TMDB returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Failed to parse response at `{path}`: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl TmdbError {
    /// HTTP status for errors the API itself reported.
    pub fn status(&self) -> Option<u16> {
        match self {
            TmdbError::Api { status, .. } => Some(*status),
            TmdbError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

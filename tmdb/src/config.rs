use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB read access token. Debug and Display never print the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into().trim().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn as_header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub base_url: String,
    pub token: BearerToken,
    /// Sent as the `language` parameter when set.
    pub language: Option<String>,
    pub include_adult: bool,
    /// Per-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl TmdbConfig {
    pub fn new(token: BearerToken) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token,
            language: None,
            include_adult: false,
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_redacted_in_debug_output() {
        let config = TmdbConfig::new(BearerToken::new("super-secret"));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("BearerToken(***)"));
    }

    #[test]
    fn token_is_trimmed() {
        let token = BearerToken::new("  abc \n");
        assert_eq!(token.as_header_value(), "Bearer abc");
        assert!(BearerToken::new("   ").is_empty());
    }
}

//! API origin configuration and URL absolutization.
//!
//! Every resource shares one origin. Media fields in API payloads are often
//! relative (`/media/a.jpg`), so the same origin is used to make them
//! absolute before they reach a view.

/// Environment variable holding the API origin.
pub const API_URL_ENV: &str = "SITE_API_URL";

/// Origin used when `SITE_API_URL` is unset or blank.
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    origin: String,
}

impl ApiConfig {
    /// Trailing slashes are stripped so endpoint joins never double up.
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(origin) if !origin.trim().is_empty() => Self::new(&origin),
            _ => Self::new(DEFAULT_API_ORIGIN),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Join an API path (`/api/news/`) to the origin.
    pub fn endpoint(&self, path: &str) -> String {
        join(&self.origin, path)
    }

    /// Make a media URL absolute.
    ///
    /// Blank input yields `""`. `http://` and `https://` URLs (any case) are
    /// returned trimmed but otherwise untouched.
    pub fn absolute_url(&self, raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return String::new();
        }
        if has_http_scheme(raw) {
            return raw.to_string();
        }
        join(&self.origin, raw)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_ORIGIN)
    }
}

fn has_http_scheme(value: &str) -> bool {
    let lower = value.get(..8).unwrap_or(value).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Exactly one slash between origin and path.
fn join(origin: &str, path: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{origin}/{path}")
}

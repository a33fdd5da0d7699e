//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Base URL of the backend that serves `/api/*`
    /// Example: http://127.0.0.1:8000
    pub backend_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let backend_url = lookup("BACKEND_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Self { backend_url }
    }

    /// Check if a backend is configured
    pub fn has_backend(&self) -> bool {
        self.backend_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_backend_url() {
        let config = Config::from_lookup(lookup(&[("BACKEND_URL", "http://127.0.0.1:8000/")]));

        assert!(config.has_backend());
        assert_eq!(config.backend_url.as_deref(), Some("http://127.0.0.1:8000"));
    }

    #[test]
    fn test_missing_backend_url() {
        let config = Config::from_lookup(lookup(&[]));
        assert!(!config.has_backend());
    }

    #[test]
    fn test_blank_backend_url_is_ignored() {
        let config = Config::from_lookup(lookup(&[("BACKEND_URL", "   ")]));
        assert!(config.backend_url.is_none());
    }
}

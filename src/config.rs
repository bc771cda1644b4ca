//! Backend Configuration
//!
//! Origin of the REST backend. Set `TRAVEL_PLANNER_API_URL` at build time to override.

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build-time override, falling back to the local dev server
    pub fn from_env() -> Self {
        match option_env!("TRAVEL_PLANNER_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origin() {
        let config = ApiConfig::default();
        assert_eq!(config.url("/projects/"), "http://127.0.0.1:8000/projects/");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ApiConfig::new("https://planner.example.com//");
        assert_eq!(config.base_url, "https://planner.example.com");
        assert_eq!(config.url("/places/5/visit"), "https://planner.example.com/places/5/visit");
    }
}

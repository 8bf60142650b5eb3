pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL
        } else {
            trimmed
        };
        ApiConfig { base_url: base_url.to_string() }
    }

    /// Base URL baked in at build time through `NOTES_API_URL`, if set.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("NOTES_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    pub fn note_url(&self, id: &str) -> String {
        format!("{}/notes/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

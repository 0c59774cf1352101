//! Session configuration shared by every endpoint widget
//!
//! Holds the base URL and bearer token for the lifetime of the process. It is
//! never written to disk; the config file only seeds the initial base URL.

pub const DEFAULT_BASE_URL: &str = "https://api.sidis.com";

/// Fields of the session configuration, used for keyed updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionField {
    BaseUrl,
    Token,
}

impl SessionField {
    pub fn label(&self) -> &'static str {
        match self {
            SessionField::BaseUrl => "Base URL",
            SessionField::Token => "Token",
        }
    }

    pub fn other(self) -> Self {
        match self {
            SessionField::BaseUrl => SessionField::Token,
            SessionField::Token => SessionField::BaseUrl,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub base_url: String,
    pub token: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: String::new(),
        }
    }
}

impl SessionConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Replace a single field, leaving the other untouched
    pub fn update(&mut self, field: SessionField, value: impl Into<String>) {
        match field {
            SessionField::BaseUrl => self.base_url = value.into(),
            SessionField::Token => self.token = value.into(),
        }
    }

    pub fn get(&self, field: SessionField) -> &str {
        match field {
            SessionField::BaseUrl => &self.base_url,
            SessionField::Token => &self.token,
        }
    }

    /// Both base URL and token are present. No other validation is done.
    pub fn is_ready(&self) -> bool {
        !self.base_url.is_empty() && !self.token.is_empty()
    }

    /// Token suitable for the header line
    pub fn masked_token(&self) -> String {
        mask_token(&self.token)
    }
}

pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 15 {
        return "●".repeat(chars.len());
    }

    let first: String = chars[..7].iter().collect();
    let last: String = chars[chars.len() - 6..].iter().collect();
    format!("{first}...{last}")
}

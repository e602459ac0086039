//! Client configuration, read once at startup and passed down explicitly.

use showcase_core::category::Category;

/// Display language for presentation strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Chinese,
    English,
}

impl Language {
    /// Parse a language code (`zh`, `en`, with optional region suffix).
    /// Unknown codes fall back to Chinese.
    pub fn from_code(code: &str) -> Language {
        let code = code.trim().to_ascii_lowercase();
        if code == "en" || code.starts_with("en-") || code.starts_with("en_") {
            Language::English
        } else {
            Language::Chinese
        }
    }
}

/// Settings the client needs: where the API lives and how to label things.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin without a trailing slash, e.g. `http://localhost:5000`.
    pub base_url: String,
    pub language: Language,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, language: Language) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, language }
    }

    /// Load from `SHOWCASE_API_URL` (default `http://localhost:5000`) and
    /// `SHOWCASE_LANGUAGE` (default `zh`).
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url =
            lookup("SHOWCASE_API_URL").unwrap_or_else(|| "http://localhost:5000".into());
        let language = lookup("SHOWCASE_LANGUAGE")
            .map(|code| Language::from_code(&code))
            .unwrap_or_default();
        Self::new(base_url, language)
    }

    /// Display label for a stored category string in the configured
    /// language. Unknown categories are labelled as "other".
    pub fn category_label(&self, stored: &str) -> &'static str {
        let category = Category::from_stored(stored);
        match self.language {
            Language::Chinese => category.as_str(),
            Language::English => category.english_label(),
        }
    }
}

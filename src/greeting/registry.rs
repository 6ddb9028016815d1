//! Greeting registry: the fixed table of "good morning" texts.
//!
//! The registry is built once at start-up and never changes afterwards, so
//! handlers share it behind an `Arc` with no locking.

use crate::greeting::LanguageCode;
use thiserror::Error;

/// A single (language, greeting) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreetingEntry {
    pub language: LanguageCode,
    pub text: &'static str,
}

impl GreetingEntry {
    pub const fn new(language: LanguageCode, text: &'static str) -> Self {
        Self { language, text }
    }
}

/// Errors raised while building a registry from a custom entry list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Language '{0}' is registered more than once")]
    DuplicateLanguage(LanguageCode),

    #[error("No greeting registered for default language '{0}'")]
    MissingDefault(LanguageCode),
}

/// Ordered, immutable collection of greetings.
#[derive(Debug, Clone)]
pub struct GreetingRegistry {
    entries: Vec<GreetingEntry>,
    /// Position of the `LanguageCode::DEFAULT` entry, checked at construction
    default_index: usize,
}

impl GreetingRegistry {
    /// Build the standard registry (EN, ES, IT).
    pub fn new() -> Self {
        let entries = default_greetings();
        Self {
            entries,
            default_index: 0,
        }
    }

    /// Build a registry from a caller-supplied list.
    ///
    /// Order is preserved. Language codes must be unique and the default
    /// language must be present, since every failed lookup falls back to it.
    pub fn from_entries(entries: Vec<GreetingEntry>) -> Result<Self, RegistryError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.language == entry.language) {
                return Err(RegistryError::DuplicateLanguage(entry.language));
            }
        }

        let default_index = entries
            .iter()
            .position(|e| e.language == LanguageCode::DEFAULT)
            .ok_or(RegistryError::MissingDefault(LanguageCode::DEFAULT))?;

        Ok(Self {
            entries,
            default_index,
        })
    }

    /// Case-insensitive lookup by raw language code.
    ///
    /// Unknown codes are an expected outcome and yield `None`.
    pub fn by_language(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.language.matches(code))
            .map(|e| e.text)
    }

    /// Typed lookup for callers that already hold a `LanguageCode`.
    pub fn get(&self, language: LanguageCode) -> Option<&GreetingEntry> {
        self.entries.iter().find(|e| e.language == language)
    }

    /// Lookup with the default fallback applied.
    pub fn by_language_or_default(&self, code: &str) -> &'static str {
        self.by_language(code)
            .unwrap_or_else(|| self.default_entry().text)
    }

    /// Every entry in registration order.
    pub fn all(&self) -> impl Iterator<Item = &GreetingEntry> + '_ {
        self.entries.iter()
    }

    /// Greeting texts in registration order.
    pub fn greetings(&self) -> Vec<&'static str> {
        self.all().map(|e| e.text).collect()
    }

    /// The entry used when nothing else matches (English).
    pub fn default_entry(&self) -> &GreetingEntry {
        &self.entries[self.default_index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for GreetingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Standard greetings. English must stay first; `GreetingRegistry::new`
/// relies on it being the default entry.
fn default_greetings() -> Vec<GreetingEntry> {
    vec![
        GreetingEntry::new(LanguageCode::En, "Good morning!"),
        GreetingEntry::new(LanguageCode::Es, "Buenos dias!"),
        GreetingEntry::new(LanguageCode::It, "Buongiorno!"),
    ]
}

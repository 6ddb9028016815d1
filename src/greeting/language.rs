//! Language codes understood by the greeting registry.
//!
//! The set is closed: a code either parses into one of the `LanguageCode`
//! variants or it is rejected with [`UnknownLanguage`].

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A supported greeting language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LanguageCode {
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "ES")]
    Es,
    #[serde(rename = "IT")]
    It,
}

/// Returned when a string does not name any supported language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown language code: '{0}'")]
pub struct UnknownLanguage(pub String);

impl LanguageCode {
    /// Every supported language, in registry order.
    pub const ALL: [LanguageCode; 3] = [LanguageCode::En, LanguageCode::Es, LanguageCode::It];

    /// The language used when a lookup has no match.
    pub const DEFAULT: LanguageCode = LanguageCode::En;

    /// Upper-case code as exposed to clients (e.g. "EN").
    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::En => "EN",
            LanguageCode::Es => "ES",
            LanguageCode::It => "IT",
        }
    }

    /// Case-insensitive comparison against a raw code.
    pub fn matches(&self, code: &str) -> bool {
        self.code().eq_ignore_ascii_case(code)
    }
}

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::ALL
            .into_iter()
            .find(|lang| lang.matches(s))
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

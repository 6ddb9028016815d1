//! Greeting lookup.
//!
//! - `language`: the closed set of supported language codes
//! - `registry`: the immutable table of greetings and its lookup rules
//!
//! # Example
//!
//! ```rust
//! use greeting_service::greeting::GreetingRegistry;
//!
//! let registry = GreetingRegistry::new();
//! assert_eq!(registry.by_language("es"), Some("Buenos dias!"));
//! assert_eq!(registry.by_language_or_default("fr"), "Good morning!");
//! ```

mod language;
mod registry;

pub use language::{LanguageCode, UnknownLanguage};
pub use registry::{GreetingEntry, GreetingRegistry, RegistryError};

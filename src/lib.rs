//! Familiar Validation
//!
//! Schema validation core for the Familiar platform: composable schemas that
//! check JSON values and report structured issues, and a localization layer
//! that turns those issues into messages per language.
//!
//! ## Features
//!
//! - **Lazy Schemas**: Schemas resolved at parse time, so graphs can refer to
//!   themselves or to each other (trees, linked lists, mutual recursion)
//! - **Sync and Async Parsing**: Every schema reports whether it needs the
//!   asynchronous entry point; mismatches fail fast
//! - **Complete Locale Packs**: Every language provides a message for every
//!   rule in a closed catalog, checked at compile time for packs written in
//!   Rust and at load time for packs read from TOML
//! - **Issues as Data**: Validation failures are returned, not raised
//!
//! ## Example
//!
//! ```
//! use familiar_validation::i18n::{Language, LocalizationRegistry};
//! use familiar_validation::schema::{lazy, nullable, number, object, Schema, SchemaRef};
//! use familiar_validation::ValidationContext;
//! use serde_json::json;
//!
//! fn node() -> SchemaRef {
//!     object(vec![
//!         ("value", number()),
//!         ("next", lazy(|_| nullable(node()))),
//!     ])
//! }
//!
//! let input = json!({"value": 1, "next": {"value": "x", "next": null}});
//! let mut dataset = node().parse(&input, &ValidationContext::new()).unwrap();
//! assert_eq!(dataset.issues[0].path.to_string(), "next.value");
//!
//! let registry = LocalizationRegistry::with_builtin_locales();
//! registry.localize(Language::En, &mut dataset.issues).unwrap();
//! assert_eq!(
//!     dataset.issues[0].message.as_deref(),
//!     Some("Invalid type: Expected number but received \"x\"")
//! );
//! ```

pub mod actions;
pub mod config;
pub mod context;
pub mod error;
pub mod i18n;
pub mod issue;
pub mod schema;

pub use config::ValidationSettings;
pub use context::ValidationContext;
pub use error::{Result, ValidationError};
pub use i18n::{Language, LanguageEntry, LocalizationRegistry, MessageKey, MessageProvider, RuleId};
pub use issue::{Issue, IssuePath, PathItem};
pub use schema::{parse, parse_async, Dataset, Schema, SchemaKind, SchemaRef};

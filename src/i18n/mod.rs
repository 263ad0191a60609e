//! Localized rule messages
//!
//! Every language implements a message for every rule in a fixed catalog:
//!
//! - [`RuleId`] enumerates the catalog; [`SpecificMessages`] has one field
//!   per rule, so a pack written in code cannot omit or invent a rule.
//! - [`LanguageEntry`] is a complete pack for one [`Language`].
//! - [`LocalizationRegistry`] resolves `(language, rule or root)` to text.
//!
//! Choosing which language is active is left to the caller.

pub mod catalog;
pub mod entry;
pub mod language;
pub mod locales;
pub mod message;
pub mod registry;

pub use catalog::{MessageKey, RuleId, SpecificMessages};
pub use entry::{LanguageEntry, LocalePackFile};
pub use language::Language;
pub use message::MessageProvider;
pub use registry::LocalizationRegistry;

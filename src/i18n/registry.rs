//! Localization Registry
//!
//! Maps language codes to locale packs and turns issues into messages. The
//! registry never substitutes one language for another: asking for a
//! language that was not registered is an error the caller must handle.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{OnceLock, RwLock};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::catalog::MessageKey;
use super::entry::LanguageEntry;
use super::language::Language;
use super::locales;
use crate::error::{Result, ValidationError};
use crate::issue::Issue;

/// Registered locale packs, keyed by language
#[derive(Debug, Clone, Default)]
pub struct LocalizationRegistry {
    entries: HashMap<Language, LanguageEntry>,
}

impl LocalizationRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the packs shipped with the crate
    pub fn with_builtin_locales() -> Self {
        let mut registry = Self::new();
        for entry in locales::builtin() {
            registry.register(entry);
        }
        registry
    }

    /// Process-wide registry, empty until something registers into it
    pub fn global() -> &'static RwLock<LocalizationRegistry> {
        static GLOBAL: OnceLock<RwLock<LocalizationRegistry>> = OnceLock::new();
        GLOBAL.get_or_init(|| RwLock::new(LocalizationRegistry::new()))
    }

    /// Store a pack, replacing any pack for the same language
    pub fn register(&mut self, entry: LanguageEntry) {
        let code = entry.code;
        if self.entries.insert(code, entry).is_some() {
            warn!(language = %code, "Replaced existing locale pack");
        } else {
            debug!(language = %code, "Registered locale pack");
        }
    }

    /// The pack for a language, if registered
    pub fn get(&self, code: Language) -> Option<&LanguageEntry> {
        self.entries.get(&code)
    }

    /// Whether a language has a pack
    pub fn contains(&self, code: Language) -> bool {
        self.entries.contains_key(&code)
    }

    /// Registered languages, sorted by code
    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<_> = self.entries.keys().copied().collect();
        languages.sort();
        languages
    }

    /// Resolve the message for `key` in `code` against an issue
    pub fn resolve_message(&self, code: Language, key: MessageKey, issue: &Issue) -> Result<String> {
        let entry = self
            .entries
            .get(&code)
            .ok_or_else(|| ValidationError::UnknownLanguage(code.to_string()))?;
        Ok(entry.message(key).resolve(issue))
    }

    /// Same as [`resolve_message`](Self::resolve_message) with string identifiers.
    ///
    /// `name` is a rule name or `"schema"` for the root message.
    pub fn resolve_message_by_name(&self, code: &str, name: &str, issue: &Issue) -> Result<String> {
        let code: Language = code.parse()?;
        let key: MessageKey = name.parse()?;
        self.resolve_message(code, key, issue)
    }

    /// Fill in the message of every issue using the issue's own key
    pub fn localize(&self, code: Language, issues: &mut [Issue]) -> Result<()> {
        let entry = self
            .entries
            .get(&code)
            .ok_or_else(|| ValidationError::UnknownLanguage(code.to_string()))?;
        for issue in issues.iter_mut() {
            issue.message = Some(entry.message(issue.key).resolve(issue));
        }
        Ok(())
    }

    /// Register every `*.toml` locale pack directly inside `dir`.
    ///
    /// Any pack that fails to parse or does not match the catalog aborts
    /// the load; packs registered before the failure stay registered.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        let mut paths = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("locale directory walk failed"))
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
                paths.push(path.to_path_buf());
            }
        }
        paths.sort();

        for path in &paths {
            debug!(path = %path.display(), "Loading locale pack");
            self.register(LanguageEntry::from_path(path)?);
        }
        Ok(paths.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::RuleId;
    use serde_json::json;

    #[test]
    fn test_empty_registry_has_no_implicit_entries() {
        let registry = LocalizationRegistry::new();
        let issue = Issue::schema("number", "number", &json!("x"));
        let result = registry.resolve_message(Language::En, MessageKey::Root, &issue);
        assert!(matches!(result, Err(ValidationError::UnknownLanguage(code)) if code == "en"));
    }

    #[test]
    fn test_builtin_locales() {
        let registry = LocalizationRegistry::with_builtin_locales();
        assert_eq!(registry.languages(), vec![Language::De, Language::En, Language::Fr]);
        assert!(!registry.contains(Language::Ja));
    }

    #[test]
    fn test_register_overwrites() {
        let mut registry = LocalizationRegistry::with_builtin_locales();
        let mut replacement = registry.get(Language::En).unwrap().clone();
        replacement.schema = "Bad input".into();
        registry.register(replacement);

        let issue = Issue::schema("number", "number", &json!("x"));
        assert_eq!(
            registry.resolve_message(Language::En, MessageKey::Root, &issue).unwrap(),
            "Bad input"
        );
        assert_eq!(registry.languages().len(), 3);
    }

    #[test]
    fn test_resolve_by_name() {
        let registry = LocalizationRegistry::with_builtin_locales();
        let issue = Issue::rule(RuleId::MinValue, &json!(2), Some(">=5".into()), "2", Some(json!(5)));
        let message = registry.resolve_message_by_name("en", "min_value", &issue).unwrap();
        assert!(message.contains(">=5"));
        assert!(message.contains('2'));

        assert!(matches!(
            registry.resolve_message_by_name("en", "minValue", &issue),
            Err(ValidationError::UnknownRule(_))
        ));
        assert!(matches!(
            registry.resolve_message_by_name("xx", "schema", &issue),
            Err(ValidationError::UnknownLanguage(_))
        ));
    }
}

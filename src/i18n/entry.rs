//! Locale packs: one root message plus one message per catalog rule

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::catalog::{MessageKey, RuleId, SpecificMessages};
use super::language::Language;
use super::message::MessageProvider;
use crate::error::{Result, ValidationError};

/// A complete locale pack for one language.
///
/// Packs written in code are complete by construction because
/// [`SpecificMessages`] has a field for every rule. Packs loaded from files
/// go through [`LanguageEntry::from_templates`], which rejects any pack whose
/// keys differ from the catalog.
#[derive(Debug, Clone)]
pub struct LanguageEntry {
    /// Language this pack is written in
    pub code: Language,
    /// Root message, used for schema type mismatches
    pub schema: MessageProvider,
    /// Per-rule messages
    pub specific: SpecificMessages,
}

impl LanguageEntry {
    /// Create a pack from its parts
    pub fn new(code: Language, schema: impl Into<MessageProvider>, specific: SpecificMessages) -> Self {
        Self {
            code,
            schema: schema.into(),
            specific,
        }
    }

    /// The provider for a message key
    pub fn message(&self, key: MessageKey) -> &MessageProvider {
        match key {
            MessageKey::Root => &self.schema,
            MessageKey::Rule(rule) => self.specific.get(rule),
        }
    }

    /// Build a pack from template strings keyed by rule name.
    ///
    /// The key set must equal the rule catalog exactly; otherwise the pack
    /// is rejected with the missing and extra keys.
    pub fn from_templates(
        code: Language,
        schema: impl Into<String>,
        specific: &BTreeMap<String, String>,
    ) -> Result<Self> {
        let missing: Vec<String> = RuleId::ALL
            .iter()
            .filter(|rule| !specific.contains_key(rule.as_str()))
            .map(|rule| rule.as_str().to_string())
            .collect();
        let extra: Vec<String> = specific
            .keys()
            .filter(|key| RuleId::parse(key).is_none())
            .cloned()
            .collect();

        if !missing.is_empty() || !extra.is_empty() {
            return Err(ValidationError::CatalogIncompleteness {
                code: code.to_string(),
                missing,
                extra,
            });
        }

        let specific = SpecificMessages::try_from_fn(|rule| {
            specific
                .get(rule.as_str())
                .map(|text| MessageProvider::template(text.clone()))
        })
        .ok_or_else(|| ValidationError::CatalogIncompleteness {
            code: code.to_string(),
            missing: Vec::new(),
            extra: Vec::new(),
        })?;

        Ok(Self {
            code,
            schema: MessageProvider::template(schema.into()),
            specific,
        })
    }

    /// Parse a pack from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: LocalePackFile = toml::from_str(content)?;
        file.into_entry()
    }

    /// Load a pack from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// On-disk form of a locale pack.
///
/// ```toml
/// code = "nl"
/// schema = "Ongeldig type: verwacht {expected} maar ontvangen {received}"
///
/// [specific]
/// bic = "Ongeldige BIC: ontvangen {received}"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalePackFile {
    pub code: Language,
    pub schema: String,
    #[serde(default)]
    pub specific: BTreeMap<String, String>,
}

impl LocalePackFile {
    /// Validate against the catalog and compile the templates
    pub fn into_entry(self) -> Result<LanguageEntry> {
        LanguageEntry::from_templates(self.code, self.schema, &self.specific)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Issue;
    use serde_json::json;

    fn full_templates() -> BTreeMap<String, String> {
        RuleId::ALL
            .iter()
            .map(|rule| (rule.as_str().to_string(), format!("{} failed: {{received}}", rule)))
            .collect()
    }

    #[test]
    fn test_from_templates_complete() {
        let entry = LanguageEntry::from_templates(Language::Nl, "Ongeldig type", &full_templates()).unwrap();
        let issue = Issue::rule(RuleId::Email, &json!("nope"), None, "\"nope\"", None);
        assert_eq!(
            entry.message(MessageKey::Rule(RuleId::Email)).resolve(&issue),
            "email failed: \"nope\""
        );
        assert_eq!(entry.message(MessageKey::Root).resolve(&issue), "Ongeldig type");
    }

    #[test]
    fn test_from_templates_missing_and_extra() {
        let mut templates = full_templates();
        templates.remove("ulid");
        templates.insert("min_lenght".to_string(), "typo".to_string());

        match LanguageEntry::from_templates(Language::Nl, "x", &templates) {
            Err(ValidationError::CatalogIncompleteness { code, missing, extra }) => {
                assert_eq!(code, "nl");
                assert_eq!(missing, vec!["ulid".to_string()]);
                assert_eq!(extra, vec!["min_lenght".to_string()]);
            }
            other => panic!("Expected CatalogIncompleteness, got {:?}", other.map(|e| e.code)),
        }
    }

    #[test]
    fn test_from_toml_str() {
        let mut content = String::from("code = \"sl\"\nschema = \"Neveljaven tip\"\n\n[specific]\n");
        for rule in RuleId::ALL {
            content.push_str(&format!("{} = \"{} ni veljaven\"\n", rule, rule));
        }
        let entry = LanguageEntry::from_toml_str(&content).unwrap();
        assert_eq!(entry.code, Language::Sl);
    }

    #[test]
    fn test_from_toml_unknown_language() {
        let result = LanguageEntry::from_toml_str("code = \"xx\"\nschema = \"x\"\n");
        assert!(matches!(result, Err(ValidationError::Toml(_))));
    }
}

//! Validation issues and the paths that locate them

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::i18n::{MessageKey, RuleId};

/// One step into a nested input
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathItem {
    /// Object key
    Key(String),
    /// Array index
    Index(usize),
}

impl fmt::Display for PathItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathItem::Key(key) => write!(f, "{}", key),
            PathItem::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathItem {
    fn from(key: &str) -> Self {
        PathItem::Key(key.to_string())
    }
}

impl From<usize> for PathItem {
    fn from(index: usize) -> Self {
        PathItem::Index(index)
    }
}

/// Location of an issue within the input, outermost step first.
///
/// Displays as a dot path (`next.value`, `children.0.name`). The root path
/// displays as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssuePath(VecDeque<PathItem>);

impl IssuePath {
    /// The empty path
    pub fn root() -> Self {
        Self::default()
    }

    /// Whether the issue is located at the input itself
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of steps from the root
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// The individual steps, outermost first
    pub fn items(&self) -> impl Iterator<Item = &PathItem> + '_ {
        self.0.iter()
    }

    /// Put a step in front of the existing ones
    pub fn prepend(&mut self, item: PathItem) {
        self.0.push_front(item);
    }

    /// Render the path with `.` separators
    pub fn dot_path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for IssuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl FromIterator<PathItem> for IssuePath {
    fn from_iter<I: IntoIterator<Item = PathItem>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A single validation failure.
///
/// `key` selects the localized message: [`MessageKey::Root`] for type
/// mismatches reported by schemas, [`MessageKey::Rule`] for failed actions.
/// `message` stays `None` until the issue is localized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    /// Message key ("schema" or a rule identifier)
    pub key: MessageKey,
    /// Schema kind or rule name that produced the issue
    pub kind: &'static str,
    /// The offending input, `None` when the value was absent
    pub input: Option<Value>,
    /// Description of what was expected
    pub expected: Option<String>,
    /// Description of what was received
    pub received: String,
    /// Rule parameter (limit, pattern, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<Value>,
    /// Location within the input
    pub path: IssuePath,
    /// Localized message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Issue {
    /// Type mismatch reported by a schema
    pub fn schema(kind: &'static str, expected: impl Into<String>, input: &Value) -> Self {
        Self {
            key: MessageKey::Root,
            kind,
            input: Some(input.clone()),
            expected: Some(expected.into()),
            received: describe(input),
            requirement: None,
            path: IssuePath::root(),
            message: None,
        }
    }

    /// A required value that was not present at all
    pub fn missing(kind: &'static str, expected: impl Into<String>) -> Self {
        Self {
            key: MessageKey::Root,
            kind,
            input: None,
            expected: Some(expected.into()),
            received: "undefined".to_string(),
            requirement: None,
            path: IssuePath::root(),
            message: None,
        }
    }

    /// Failure of a catalog rule
    pub fn rule(
        rule: RuleId,
        input: &Value,
        expected: Option<String>,
        received: impl Into<String>,
        requirement: Option<Value>,
    ) -> Self {
        Self {
            key: MessageKey::Rule(rule),
            kind: rule.as_str(),
            input: Some(input.clone()),
            expected,
            received: received.into(),
            requirement,
            path: IssuePath::root(),
            message: None,
        }
    }

    /// Place this issue under `item`
    pub fn under(mut self, item: impl Into<PathItem>) -> Self {
        self.path.prepend(item.into());
        self
    }
}

/// Short, human-readable rendering of a received value
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(_) => "Array".to_string(),
        Value::Object(_) => "Object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dot_path() {
        let path: IssuePath = vec![PathItem::from("children"), PathItem::from(2usize), PathItem::from("name")]
            .into_iter()
            .collect();
        assert_eq!(path.dot_path(), "children.2.name");
        assert_eq!(path.depth(), 3);
        assert_eq!(IssuePath::root().to_string(), "");
    }

    #[test]
    fn test_under_prepends() {
        let issue = Issue::schema("number", "number", &json!("x")).under("value").under("next");
        assert_eq!(issue.path.to_string(), "next.value");
    }

    #[test]
    fn test_deep_path_keeps_order() {
        let mut issue = Issue::schema("number", "number", &json!("x")).under("value");
        for _ in 0..10_000 {
            issue = issue.under("next");
        }
        assert_eq!(issue.path.depth(), 10_001);
        assert_eq!(issue.path.items().next(), Some(&PathItem::from("next")));
        assert_eq!(issue.path.items().last(), Some(&PathItem::from("value")));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&json!("x")), "\"x\"");
        assert_eq!(describe(&json!(1.5)), "1.5");
        assert_eq!(describe(&json!(null)), "null");
        assert_eq!(describe(&json!({})), "Object");
        assert_eq!(describe(&json!([1])), "Array");
    }

    #[test]
    fn test_missing_issue() {
        let issue = Issue::missing("string", "string");
        assert!(issue.input.is_none());
        assert_eq!(issue.received, "undefined");
        assert_eq!(issue.key, MessageKey::Root);
    }
}

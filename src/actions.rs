//! Rule actions run by [`pipe`](crate::schema::pipe)
//!
//! Each action checks one catalog rule against an already type-checked
//! value and reports at most one issue keyed by that rule. Only a handful
//! of rules have actions here; the rest of the catalog exists for message
//! lookup.

use std::future::Future;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;

use crate::error::{Result, ValidationError};
use crate::i18n::RuleId;
use crate::issue::{describe, Issue};

/// Shared handle to an action
pub type ActionRef = Arc<dyn Action>;

/// A single rule check
#[async_trait]
pub trait Action: Send + Sync {
    /// The catalog rule this action reports
    fn rule(&self) -> RuleId;

    /// Whether the check needs `run_async`
    fn is_async(&self) -> bool {
        false
    }

    /// Check synchronously
    fn run(&self, input: &Value) -> Result<Option<Issue>>;

    /// Check, possibly suspending
    async fn run_async(&self, input: &Value) -> Result<Option<Issue>> {
        self.run(input)
    }
}

/// Length of a string (in characters) or an array
fn measure(input: &Value) -> Option<usize> {
    match input {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// JSON form of a numeric limit, integral when possible
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

/// Length comparison
#[derive(Debug, Clone, Copy)]
pub struct LengthAction {
    rule: RuleId,
    requirement: usize,
}

impl LengthAction {
    fn prefix(&self) -> &'static str {
        match self.rule {
            RuleId::MinLength => ">=",
            RuleId::MaxLength => "<=",
            RuleId::NotLength => "!",
            _ => "",
        }
    }

    fn passes(&self, len: usize) -> bool {
        match self.rule {
            RuleId::MinLength => len >= self.requirement,
            RuleId::MaxLength => len <= self.requirement,
            RuleId::NotLength => len != self.requirement,
            _ => len == self.requirement,
        }
    }
}

impl Action for LengthAction {
    fn rule(&self) -> RuleId {
        self.rule
    }

    fn run(&self, input: &Value) -> Result<Option<Issue>> {
        let received = match measure(input) {
            Some(len) if self.passes(len) => return Ok(None),
            Some(len) => len.to_string(),
            None => describe(input),
        };
        Ok(Some(Issue::rule(
            self.rule,
            input,
            Some(format!("{}{}", self.prefix(), self.requirement)),
            received,
            Some(Value::from(self.requirement)),
        )))
    }
}

/// Numeric comparison
#[derive(Debug, Clone, Copy)]
pub struct ValueAction {
    rule: RuleId,
    requirement: f64,
}

impl ValueAction {
    fn prefix(&self) -> &'static str {
        match self.rule {
            RuleId::MinValue => ">=",
            RuleId::MaxValue => "<=",
            RuleId::MultipleOf => "%",
            _ => "!",
        }
    }

    fn passes(&self, n: f64) -> bool {
        let req = self.requirement;
        match self.rule {
            RuleId::MinValue => n >= req,
            RuleId::MaxValue => n <= req,
            RuleId::MultipleOf => req != 0.0 && (n % req).abs() < f64::EPSILON,
            _ => n != req,
        }
    }
}

impl Action for ValueAction {
    fn rule(&self) -> RuleId {
        self.rule
    }

    fn run(&self, input: &Value) -> Result<Option<Issue>> {
        if input.as_f64().is_some_and(|n| self.passes(n)) {
            return Ok(None);
        }
        let requirement = number_value(self.requirement);
        Ok(Some(Issue::rule(
            self.rule,
            input,
            Some(format!("{}{}", self.prefix(), requirement)),
            describe(input),
            Some(requirement),
        )))
    }
}

/// Whole-number check
#[derive(Debug, Clone, Copy)]
pub struct IntegerAction;

impl Action for IntegerAction {
    fn rule(&self) -> RuleId {
        RuleId::Integer
    }

    fn run(&self, input: &Value) -> Result<Option<Issue>> {
        let is_integer = input.is_i64()
            || input.is_u64()
            || input.as_f64().is_some_and(|n| n.is_finite() && n.fract() == 0.0);
        if is_integer {
            return Ok(None);
        }
        Ok(Some(Issue::rule(RuleId::Integer, input, None, describe(input), None)))
    }
}

/// Pattern match on strings
#[derive(Debug, Clone)]
pub struct PatternAction {
    rule: RuleId,
    pattern: Regex,
}

impl Action for PatternAction {
    fn rule(&self) -> RuleId {
        self.rule
    }

    fn run(&self, input: &Value) -> Result<Option<Issue>> {
        if input.as_str().is_some_and(|s| self.pattern.is_match(s)) {
            return Ok(None);
        }
        let expected = (self.rule == RuleId::Regex).then(|| format!("/{}/", self.pattern));
        Ok(Some(Issue::rule(
            self.rule,
            input,
            expected,
            describe(input),
            Some(Value::from(self.pattern.as_str())),
        )))
    }
}

/// Prefix, suffix and substring checks on strings
#[derive(Debug, Clone)]
pub struct ContentAction {
    rule: RuleId,
    requirement: String,
}

impl Action for ContentAction {
    fn rule(&self) -> RuleId {
        self.rule
    }

    fn run(&self, input: &Value) -> Result<Option<Issue>> {
        let req = self.requirement.as_str();
        let Some(s) = input.as_str() else {
            return Ok(Some(self.issue(input, describe(input))));
        };
        let received = match self.rule {
            RuleId::StartsWith if !s.starts_with(req) => {
                format!("\"{}\"", s.chars().take(req.chars().count()).collect::<String>())
            }
            RuleId::EndsWith if !s.ends_with(req) => {
                let skip = s.chars().count().saturating_sub(req.chars().count());
                format!("\"{}\"", s.chars().skip(skip).collect::<String>())
            }
            RuleId::Includes if !s.contains(req) => format!("!\"{}\"", req),
            RuleId::Excludes if s.contains(req) => format!("\"{}\"", req),
            _ => return Ok(None),
        };
        Ok(Some(self.issue(input, received)))
    }
}

impl ContentAction {
    fn issue(&self, input: &Value, received: String) -> Issue {
        let expected = if self.rule == RuleId::Excludes {
            format!("!\"{}\"", self.requirement)
        } else {
            format!("\"{}\"", self.requirement)
        };
        Issue::rule(
            self.rule,
            input,
            Some(expected),
            received,
            Some(Value::from(self.requirement.clone())),
        )
    }
}

/// Exact value match
#[derive(Debug, Clone)]
pub struct EqualsAction {
    requirement: Value,
}

impl Action for EqualsAction {
    fn rule(&self) -> RuleId {
        RuleId::Value
    }

    fn run(&self, input: &Value) -> Result<Option<Issue>> {
        if *input == self.requirement {
            return Ok(None);
        }
        Ok(Some(Issue::rule(
            RuleId::Value,
            input,
            Some(describe(&self.requirement)),
            describe(input),
            Some(self.requirement.clone()),
        )))
    }
}

/// Caller-supplied predicate
pub struct CustomAction<F> {
    check: F,
}

impl<F> Action for CustomAction<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn rule(&self) -> RuleId {
        RuleId::Custom
    }

    fn run(&self, input: &Value) -> Result<Option<Issue>> {
        if (self.check)(input) {
            return Ok(None);
        }
        Ok(Some(Issue::rule(RuleId::Custom, input, None, describe(input), None)))
    }
}

/// Caller-supplied asynchronous predicate
pub struct CustomAsyncAction<F> {
    check: F,
}

#[async_trait]
impl<F, Fut> Action for CustomAsyncAction<F>
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = bool> + Send + 'static,
{
    fn rule(&self) -> RuleId {
        RuleId::CustomAsync
    }

    fn is_async(&self) -> bool {
        true
    }

    fn run(&self, _input: &Value) -> Result<Option<Issue>> {
        Err(ValidationError::AsyncSchemaInSyncParse {
            kind: RuleId::CustomAsync.as_str(),
        })
    }

    async fn run_async(&self, input: &Value) -> Result<Option<Issue>> {
        if (self.check)(input.clone()).await {
            return Ok(None);
        }
        Ok(Some(Issue::rule(RuleId::CustomAsync, input, None, describe(input), None)))
    }
}

pub fn min_length(requirement: usize) -> ActionRef {
    Arc::new(LengthAction { rule: RuleId::MinLength, requirement })
}

pub fn max_length(requirement: usize) -> ActionRef {
    Arc::new(LengthAction { rule: RuleId::MaxLength, requirement })
}

pub fn length(requirement: usize) -> ActionRef {
    Arc::new(LengthAction { rule: RuleId::Length, requirement })
}

pub fn not_length(requirement: usize) -> ActionRef {
    Arc::new(LengthAction { rule: RuleId::NotLength, requirement })
}

pub fn min_value(requirement: f64) -> ActionRef {
    Arc::new(ValueAction { rule: RuleId::MinValue, requirement })
}

pub fn max_value(requirement: f64) -> ActionRef {
    Arc::new(ValueAction { rule: RuleId::MaxValue, requirement })
}

pub fn not_value(requirement: f64) -> ActionRef {
    Arc::new(ValueAction { rule: RuleId::NotValue, requirement })
}

pub fn multiple_of(requirement: f64) -> ActionRef {
    Arc::new(ValueAction { rule: RuleId::MultipleOf, requirement })
}

pub fn integer() -> ActionRef {
    Arc::new(IntegerAction)
}

/// Match a regular expression. Fails if the pattern does not compile.
pub fn regex(pattern: &str) -> Result<ActionRef> {
    Ok(Arc::new(PatternAction {
        rule: RuleId::Regex,
        pattern: Regex::new(pattern)?,
    }))
}

/// Match a common email address shape
pub fn email() -> ActionRef {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let pattern = EMAIL.get_or_init(|| {
        Regex::new(r"^[\w+-]+(?:\.[\w+-]+)*@[\da-zA-Z]+(?:[.-][\da-zA-Z]+)*\.[a-zA-Z]{2,}$")
            .expect("email pattern is valid")
    });
    Arc::new(PatternAction {
        rule: RuleId::Email,
        pattern: pattern.clone(),
    })
}

pub fn starts_with(requirement: impl Into<String>) -> ActionRef {
    Arc::new(ContentAction { rule: RuleId::StartsWith, requirement: requirement.into() })
}

pub fn ends_with(requirement: impl Into<String>) -> ActionRef {
    Arc::new(ContentAction { rule: RuleId::EndsWith, requirement: requirement.into() })
}

pub fn includes(requirement: impl Into<String>) -> ActionRef {
    Arc::new(ContentAction { rule: RuleId::Includes, requirement: requirement.into() })
}

pub fn excludes(requirement: impl Into<String>) -> ActionRef {
    Arc::new(ContentAction { rule: RuleId::Excludes, requirement: requirement.into() })
}

/// Require exactly this value
pub fn value(requirement: Value) -> ActionRef {
    Arc::new(EqualsAction { requirement })
}

pub fn custom<F>(check: F) -> ActionRef
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Arc::new(CustomAction { check })
}

pub fn custom_async<F, Fut>(check: F) -> ActionRef
where
    F: Fn(Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = bool> + Send + 'static,
{
    Arc::new(CustomAsyncAction { check })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_min_length_issue() {
        let issue = min_length(3).run(&json!("ab")).unwrap().unwrap();
        assert_eq!(issue.kind, "min_length");
        assert_eq!(issue.expected.as_deref(), Some(">=3"));
        assert_eq!(issue.received, "2");
        assert_eq!(issue.requirement, Some(json!(3)));
        assert!(min_length(3).run(&json!("abc")).unwrap().is_none());
    }

    #[test]
    fn test_length_counts_chars_and_items() {
        assert!(length(2).run(&json!("äö")).unwrap().is_none());
        assert!(length(2).run(&json!([1, 2])).unwrap().is_none());
        assert!(not_length(2).run(&json!([1, 2])).unwrap().is_some());
    }

    #[test]
    fn test_value_bounds() {
        let issue = min_value(5.0).run(&json!(2)).unwrap().unwrap();
        assert_eq!(issue.expected.as_deref(), Some(">=5"));
        assert_eq!(issue.received, "2");
        assert!(max_value(5.0).run(&json!(5)).unwrap().is_none());
        assert!(multiple_of(2.0).run(&json!(6)).unwrap().is_none());
        assert!(multiple_of(2.0).run(&json!(7)).unwrap().is_some());
    }

    #[test]
    fn test_integer() {
        assert!(integer().run(&json!(4)).unwrap().is_none());
        assert!(integer().run(&json!(4.5)).unwrap().is_some());
    }

    #[test]
    fn test_patterns() {
        assert!(email().run(&json!("jane@example.com")).unwrap().is_none());
        let issue = email().run(&json!("jane@")).unwrap().unwrap();
        assert_eq!(issue.kind, "email");
        assert!(regex("(").is_err());
    }

    #[test]
    fn test_content() {
        let issue = starts_with("https://").run(&json!("http://x")).unwrap().unwrap();
        assert_eq!(issue.received, "\"http://x\"");
        assert!(ends_with(".rs").run(&json!("lib.rs")).unwrap().is_none());
        assert!(includes("@").run(&json!("a@b")).unwrap().is_none());
        assert!(excludes("@").run(&json!("a@b")).unwrap().is_some());
    }

    #[test]
    fn test_value_and_custom() {
        assert!(value(json!("on")).run(&json!("on")).unwrap().is_none());
        assert!(value(json!("on")).run(&json!("off")).unwrap().is_some());
        let even = custom(|v| v.as_i64().is_some_and(|n| n % 2 == 0));
        assert!(even.run(&json!(3)).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_custom_async() {
        let action = custom_async(|v: Value| async move { v != json!("taken") });
        assert!(action.is_async());
        assert!(action.run(&json!("free")).is_err());
        assert!(action.run_async(&json!("free")).await.unwrap().is_none());
        assert!(action.run_async(&json!("taken")).await.unwrap().is_some());
    }
}

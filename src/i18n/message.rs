//! Message providers: constant text or a function of the issue

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, OnceLock};

use regex::{Captures, Regex};

use crate::issue::Issue;

/// Function computing a message from an issue
pub type ResolverFn = dyn Fn(&Issue) -> String + Send + Sync;

/// Either a fixed message or a function computing one from the issue.
///
/// Providers are created once when a locale pack is authored and invoked
/// per issue afterwards. Resolvers must not fail and must not have side
/// effects.
#[derive(Clone)]
pub enum MessageProvider {
    Constant(Cow<'static, str>),
    Resolver(Arc<ResolverFn>),
}

impl MessageProvider {
    /// Fixed message text
    pub fn constant(text: impl Into<Cow<'static, str>>) -> Self {
        MessageProvider::Constant(text.into())
    }

    /// Message computed by a closure
    pub fn resolver<F>(f: F) -> Self
    where
        F: Fn(&Issue) -> String + Send + Sync + 'static,
    {
        MessageProvider::Resolver(Arc::new(f))
    }

    /// Message template with `{placeholder}` interpolation.
    ///
    /// Supported placeholders: `expected`, `received`, `requirement`,
    /// `input`, `kind`, `path`. Unknown placeholders are left as written.
    /// A template without placeholders becomes a constant.
    pub fn template(text: impl Into<Cow<'static, str>>) -> Self {
        let text = text.into();
        if !placeholder_pattern().is_match(&text) {
            return MessageProvider::Constant(text);
        }
        MessageProvider::resolver(move |issue| interpolate(&text, issue))
    }

    /// Produce the message for an issue
    pub fn resolve(&self, issue: &Issue) -> String {
        match self {
            MessageProvider::Constant(text) => text.to_string(),
            MessageProvider::Resolver(f) => f(issue),
        }
    }

    /// Whether the message depends on the issue
    pub fn is_dynamic(&self) -> bool {
        matches!(self, MessageProvider::Resolver(_))
    }
}

impl fmt::Debug for MessageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageProvider::Constant(text) => f.debug_tuple("Constant").field(text).finish(),
            MessageProvider::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl From<&'static str> for MessageProvider {
    fn from(text: &'static str) -> Self {
        MessageProvider::template(text)
    }
}

impl From<String> for MessageProvider {
    fn from(text: String) -> Self {
        MessageProvider::template(text)
    }
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern is valid"))
}

fn interpolate(template: &str, issue: &Issue) -> String {
    placeholder_pattern()
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            match name {
                "expected" => issue.expected.clone().unwrap_or_default(),
                "received" => issue.received.clone(),
                "requirement" => issue
                    .requirement
                    .as_ref()
                    .map(render_value)
                    .unwrap_or_default(),
                "input" => issue.input.as_ref().map(render_value).unwrap_or_else(|| "undefined".to_string()),
                "kind" => issue.kind.to_string(),
                "path" => issue.path.to_string(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Strings render without quotes, everything else as JSON
fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

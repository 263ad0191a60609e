//! Schema protocol
//!
//! A schema checks a [`serde_json::Value`] and returns a [`Dataset`]: the
//! output value plus any issues found. A parse call returns `Err` only for
//! fatal failures (a lazy getter that could not produce a schema, a
//! synchronous parse of an asynchronous schema); a value that fails
//! validation is an `Ok` dataset with issues.
//!
//! Every schema has a synchronous entry point, [`Schema::parse`], and an
//! asynchronous one, [`Schema::parse_async`]. [`Schema::is_async`] tells the
//! caller which one the schema needs.

pub mod lazy;
pub mod object;
pub mod pipe;
pub mod primitives;
pub mod wrappers;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::context::ValidationContext;
use crate::error::{Result, ValidationError};
use crate::issue::Issue;

pub use lazy::{lazy, lazy_async, lazy_weak, try_lazy, try_lazy_async, LazyAsyncSchema, LazySchema};
#[allow(deprecated)]
pub use lazy::recursive;
pub use object::{array, object, ArraySchema, ObjectSchema};
pub use pipe::{pipe, PipeSchema};
pub use primitives::{any, boolean, null, number, string, PrimitiveSchema};
pub use wrappers::{nullable, optional, NullableSchema, OptionalSchema};

/// Shared handle to a schema in a graph
pub type SchemaRef = Arc<dyn Schema>;

/// Tag identifying the schema variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Any,
    Number,
    String,
    Boolean,
    Null,
    Nullable,
    Optional,
    Object,
    Array,
    Pipe,
    /// Resolved at parse time by a getter
    Lazy,
}

impl SchemaKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            SchemaKind::Any => "any",
            SchemaKind::Number => "number",
            SchemaKind::String => "string",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Null => "null",
            SchemaKind::Nullable => "nullable",
            SchemaKind::Optional => "optional",
            SchemaKind::Object => "object",
            SchemaKind::Array => "array",
            SchemaKind::Pipe => "pipe",
            SchemaKind::Lazy => "lazy",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a parse call
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Validated output (partial when there are issues)
    pub value: Value,
    /// Issues found, empty when the input is valid
    pub issues: Vec<Issue>,
}

impl Dataset {
    /// A valid output
    pub fn valid(value: Value) -> Self {
        Self {
            value,
            issues: Vec::new(),
        }
    }

    /// An output with a single issue
    pub fn from_issue(value: Value, issue: Issue) -> Self {
        Self {
            value,
            issues: vec![issue],
        }
    }

    /// Whether no issues were found
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// The output value, or the issues if there are any
    pub fn into_result(self) -> std::result::Result<Value, Vec<Issue>> {
        if self.issues.is_empty() {
            Ok(self.value)
        } else {
            Err(self.issues)
        }
    }
}

/// A validation unit.
///
/// Implementations must keep `is_async` truthful: a schema whose
/// `parse_async` may suspend reports `true` and refuses the synchronous
/// entry point. Schemas are immutable once built and may be shared across
/// concurrent parse calls.
#[async_trait]
pub trait Schema: Send + Sync {
    /// Variant tag
    fn kind(&self) -> SchemaKind;

    /// Description of the accepted shape, used as an issue's `expected`
    fn expects(&self) -> String;

    /// Whether parsing requires the asynchronous entry point
    fn is_async(&self) -> bool {
        false
    }

    /// Parse synchronously
    fn parse(&self, input: &Value, ctx: &ValidationContext) -> Result<Dataset>;

    /// Parse, possibly suspending. Synchronous schemas delegate to `parse`.
    async fn parse_async(&self, input: &Value, ctx: &ValidationContext) -> Result<Dataset> {
        self.parse(input, ctx)
    }

    /// Parse an absent value, such as a missing object key.
    ///
    /// `Ok(None)` accepts the absence and leaves the key out of the output.
    /// The default reports the value as missing.
    fn parse_missing(&self, _ctx: &ValidationContext) -> Result<Option<Dataset>> {
        Ok(Some(Dataset::from_issue(
            Value::Null,
            Issue::missing(self.kind().as_str(), self.expects()),
        )))
    }

    /// Asynchronous counterpart of [`parse_missing`](Self::parse_missing)
    async fn parse_missing_async(&self, ctx: &ValidationContext) -> Result<Option<Dataset>> {
        self.parse_missing(ctx)
    }
}

/// Synchronous entry point for a whole graph.
///
/// Refuses asynchronous schemas up front instead of failing halfway through.
pub fn parse(schema: &dyn Schema, input: &Value, ctx: &ValidationContext) -> Result<Dataset> {
    if schema.is_async() {
        return Err(ValidationError::AsyncSchemaInSyncParse {
            kind: schema.kind().as_str(),
        });
    }
    schema.parse(input, ctx)
}

/// Asynchronous entry point for a whole graph
pub async fn parse_async(schema: &dyn Schema, input: &Value, ctx: &ValidationContext) -> Result<Dataset> {
    schema.parse_async(input, ctx).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dataset_into_result() {
        assert_eq!(Dataset::valid(json!(1)).into_result().unwrap(), json!(1));

        let issue = Issue::schema("number", "number", &json!("x"));
        let issues = Dataset::from_issue(json!("x"), issue.clone()).into_result().unwrap_err();
        assert_eq!(issues, vec![issue]);
    }

    #[test]
    fn test_parse_refuses_async_schema() {
        let schema = lazy_async(|_| number());
        let result = parse(schema.as_ref(), &json!(1), &ValidationContext::new());
        assert!(matches!(
            result,
            Err(ValidationError::AsyncSchemaInSyncParse { kind: "lazy" })
        ));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(SchemaKind::Lazy.to_string(), "lazy");
        assert_eq!(serde_json::to_string(&SchemaKind::Nullable).unwrap(), "\"nullable\"");
    }
}

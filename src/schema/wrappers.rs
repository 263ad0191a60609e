//! Schemas that widen another schema

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{Dataset, Schema, SchemaKind, SchemaRef};
use crate::context::ValidationContext;
use crate::error::Result;
use crate::issue::Issue;

/// Accepts `null` or whatever the wrapped schema accepts
#[derive(Clone)]
pub struct NullableSchema {
    wrapped: SchemaRef,
}

impl NullableSchema {
    pub fn new(wrapped: SchemaRef) -> Self {
        Self { wrapped }
    }

    pub fn wrapped(&self) -> &SchemaRef {
        &self.wrapped
    }

    /// Absence is not `null`; it is reported against this schema's shape
    fn missing(&self) -> Dataset {
        Dataset::from_issue(
            Value::Null,
            Issue::missing(SchemaKind::Nullable.as_str(), self.expects()),
        )
    }
}

#[async_trait]
impl Schema for NullableSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Nullable
    }

    fn expects(&self) -> String {
        format!("{} | null", self.wrapped.expects())
    }

    fn is_async(&self) -> bool {
        self.wrapped.is_async()
    }

    fn parse(&self, input: &Value, ctx: &ValidationContext) -> Result<Dataset> {
        if input.is_null() {
            return Ok(Dataset::valid(Value::Null));
        }
        self.wrapped.parse(input, ctx)
    }

    async fn parse_async(&self, input: &Value, ctx: &ValidationContext) -> Result<Dataset> {
        if input.is_null() {
            return Ok(Dataset::valid(Value::Null));
        }
        self.wrapped.parse_async(input, ctx).await
    }

    fn parse_missing(&self, ctx: &ValidationContext) -> Result<Option<Dataset>> {
        match self.wrapped.parse_missing(ctx)? {
            None => Ok(None),
            Some(_) => Ok(Some(self.missing())),
        }
    }

    async fn parse_missing_async(&self, ctx: &ValidationContext) -> Result<Option<Dataset>> {
        match self.wrapped.parse_missing_async(ctx).await? {
            None => Ok(None),
            Some(_) => Ok(Some(self.missing())),
        }
    }
}

/// Marks an object entry that may be absent.
///
/// A present value is checked by the wrapped schema; `null` is not
/// accepted unless the wrapped schema accepts it.
#[derive(Clone)]
pub struct OptionalSchema {
    wrapped: SchemaRef,
}

impl OptionalSchema {
    pub fn new(wrapped: SchemaRef) -> Self {
        Self { wrapped }
    }

    pub fn wrapped(&self) -> &SchemaRef {
        &self.wrapped
    }
}

#[async_trait]
impl Schema for OptionalSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Optional
    }

    fn expects(&self) -> String {
        format!("{} | undefined", self.wrapped.expects())
    }

    fn is_async(&self) -> bool {
        self.wrapped.is_async()
    }

    fn parse(&self, input: &Value, ctx: &ValidationContext) -> Result<Dataset> {
        self.wrapped.parse(input, ctx)
    }

    async fn parse_async(&self, input: &Value, ctx: &ValidationContext) -> Result<Dataset> {
        self.wrapped.parse_async(input, ctx).await
    }

    fn parse_missing(&self, _ctx: &ValidationContext) -> Result<Option<Dataset>> {
        Ok(None)
    }
}

/// Wrap a schema so it also accepts `null`
pub fn nullable(wrapped: SchemaRef) -> SchemaRef {
    Arc::new(NullableSchema::new(wrapped))
}

/// Wrap a schema so its object entry may be absent
pub fn optional(wrapped: SchemaRef) -> SchemaRef {
    Arc::new(OptionalSchema::new(wrapped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::number;
    use serde_json::json;

    #[test]
    fn test_nullable() {
        let schema = nullable(number());
        let ctx = ValidationContext::new();
        assert_eq!(schema.expects(), "number | null");
        assert!(schema.parse(&json!(null), &ctx).unwrap().is_valid());
        assert!(schema.parse(&json!(3), &ctx).unwrap().is_valid());

        let dataset = schema.parse(&json!("3"), &ctx).unwrap();
        assert_eq!(dataset.issues[0].expected.as_deref(), Some("number"));
    }

    #[test]
    fn test_optional_rejects_null() {
        let schema = optional(number());
        assert_eq!(schema.kind(), SchemaKind::Optional);
        assert!(!schema.parse(&json!(null), &ValidationContext::new()).unwrap().is_valid());
    }

    #[test]
    fn test_missing_values() {
        let ctx = ValidationContext::new();
        assert!(optional(number()).parse_missing(&ctx).unwrap().is_none());
        assert!(nullable(optional(number())).parse_missing(&ctx).unwrap().is_none());

        let dataset = nullable(number()).parse_missing(&ctx).unwrap().unwrap();
        assert_eq!(dataset.issues[0].kind, "nullable");
        assert_eq!(dataset.issues[0].expected.as_deref(), Some("number | null"));
        assert_eq!(dataset.issues[0].received, "undefined");
    }
}

//! Leaf schemas for JSON scalar types

use std::sync::Arc;

use serde_json::Value;

use super::{Dataset, Schema, SchemaKind, SchemaRef};
use crate::context::ValidationContext;
use crate::error::Result;
use crate::issue::Issue;

/// Type check for one JSON scalar kind (or anything, for `any`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitiveSchema {
    kind: SchemaKind,
}

impl PrimitiveSchema {
    fn new(kind: SchemaKind) -> Self {
        Self { kind }
    }

    fn accepts(&self, input: &Value) -> bool {
        match self.kind {
            SchemaKind::Number => input.is_number(),
            SchemaKind::String => input.is_string(),
            SchemaKind::Boolean => input.is_boolean(),
            SchemaKind::Null => input.is_null(),
            _ => true,
        }
    }
}

impl Schema for PrimitiveSchema {
    fn kind(&self) -> SchemaKind {
        self.kind
    }

    fn expects(&self) -> String {
        self.kind.as_str().to_string()
    }

    fn parse(&self, input: &Value, _ctx: &ValidationContext) -> Result<Dataset> {
        if self.accepts(input) {
            Ok(Dataset::valid(input.clone()))
        } else {
            Ok(Dataset::from_issue(
                input.clone(),
                Issue::schema(self.kind.as_str(), self.expects(), input),
            ))
        }
    }
}

/// Accepts any value
pub fn any() -> SchemaRef {
    Arc::new(PrimitiveSchema::new(SchemaKind::Any))
}

/// Accepts JSON numbers
pub fn number() -> SchemaRef {
    Arc::new(PrimitiveSchema::new(SchemaKind::Number))
}

/// Accepts JSON strings
pub fn string() -> SchemaRef {
    Arc::new(PrimitiveSchema::new(SchemaKind::String))
}

/// Accepts `true` and `false`
pub fn boolean() -> SchemaRef {
    Arc::new(PrimitiveSchema::new(SchemaKind::Boolean))
}

/// Accepts only `null`
pub fn null() -> SchemaRef {
    Arc::new(PrimitiveSchema::new(SchemaKind::Null))
}

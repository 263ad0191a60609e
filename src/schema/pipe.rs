//! Schema followed by rule actions

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{Dataset, Schema, SchemaKind, SchemaRef};
use crate::actions::ActionRef;
use crate::context::ValidationContext;
use crate::error::Result;

/// Runs its actions on the output of a schema, if the schema accepted the
/// input. An absent value is left to the inner schema and skips the actions.
#[derive(Clone)]
pub struct PipeSchema {
    schema: SchemaRef,
    actions: Vec<ActionRef>,
}

impl PipeSchema {
    pub fn new(schema: SchemaRef, actions: Vec<ActionRef>) -> Self {
        Self { schema, actions }
    }

    fn stop_after_issue(ctx: &ValidationContext) -> bool {
        ctx.abort_pipe_early || ctx.abort_early
    }
}

#[async_trait]
impl Schema for PipeSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Pipe
    }

    fn expects(&self) -> String {
        self.schema.expects()
    }

    fn is_async(&self) -> bool {
        self.schema.is_async() || self.actions.iter().any(|action| action.is_async())
    }

    fn parse(&self, input: &Value, ctx: &ValidationContext) -> Result<Dataset> {
        let mut dataset = self.schema.parse(input, ctx)?;
        if !dataset.is_valid() {
            return Ok(dataset);
        }
        for action in &self.actions {
            if let Some(issue) = action.run(&dataset.value)? {
                dataset.issues.push(issue);
                if Self::stop_after_issue(ctx) {
                    break;
                }
            }
        }
        Ok(dataset)
    }

    async fn parse_async(&self, input: &Value, ctx: &ValidationContext) -> Result<Dataset> {
        let mut dataset = self.schema.parse_async(input, ctx).await?;
        if !dataset.is_valid() {
            return Ok(dataset);
        }
        for action in &self.actions {
            if let Some(issue) = action.run_async(&dataset.value).await? {
                dataset.issues.push(issue);
                if Self::stop_after_issue(ctx) {
                    break;
                }
            }
        }
        Ok(dataset)
    }

    fn parse_missing(&self, ctx: &ValidationContext) -> Result<Option<Dataset>> {
        self.schema.parse_missing(ctx)
    }

    async fn parse_missing_async(&self, ctx: &ValidationContext) -> Result<Option<Dataset>> {
        self.schema.parse_missing_async(ctx).await
    }
}

/// Create a pipe
pub fn pipe(schema: SchemaRef, actions: Vec<ActionRef>) -> SchemaRef {
    Arc::new(PipeSchema::new(schema, actions))
}

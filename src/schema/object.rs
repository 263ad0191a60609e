//! Object and array schemas
//!
//! Child issues are reported relative to the child; the container prefixes
//! the entry key or item index before passing them up.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{Dataset, Schema, SchemaKind, SchemaRef};
use crate::context::ValidationContext;
use crate::error::Result;
use crate::issue::{Issue, PathItem};

/// Object with a fixed, ordered set of entries. Unknown keys are dropped
/// from the output.
#[derive(Clone)]
pub struct ObjectSchema {
    entries: Vec<(String, SchemaRef)>,
}

impl ObjectSchema {
    pub fn new<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, SchemaRef)>,
    {
        Self {
            entries: entries.into_iter().map(|(key, schema)| (key.into(), schema)).collect(),
        }
    }

    /// Entry schemas in declaration order
    pub fn entries(&self) -> &[(String, SchemaRef)] {
        &self.entries
    }

    fn type_issue(&self, input: &Value) -> Dataset {
        Dataset::from_issue(input.clone(), Issue::schema(SchemaKind::Object.as_str(), self.expects(), input))
    }
}

fn absorb(output: &mut Map<String, Value>, issues: &mut Vec<Issue>, key: &str, dataset: Dataset) {
    issues.extend(dataset.issues.into_iter().map(|issue| issue.under(key)));
    output.insert(key.to_string(), dataset.value);
}

/// Absent keys stay absent from the output unless the schema supplied a value
fn absorb_missing(output: &mut Map<String, Value>, issues: &mut Vec<Issue>, key: &str, dataset: Option<Dataset>) {
    match dataset {
        Some(dataset) if dataset.is_valid() => {
            output.insert(key.to_string(), dataset.value);
        }
        Some(dataset) => issues.extend(dataset.issues.into_iter().map(|issue| issue.under(key))),
        None => {}
    }
}

#[async_trait]
impl Schema for ObjectSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Object
    }

    fn expects(&self) -> String {
        "Object".to_string()
    }

    fn is_async(&self) -> bool {
        self.entries.iter().any(|(_, schema)| schema.is_async())
    }

    fn parse(&self, input: &Value, ctx: &ValidationContext) -> Result<Dataset> {
        let Some(map) = input.as_object() else {
            return Ok(self.type_issue(input));
        };

        let mut output = Map::new();
        let mut issues = Vec::new();
        for (key, schema) in &self.entries {
            match map.get(key) {
                Some(value) => absorb(&mut output, &mut issues, key, schema.parse(value, ctx)?),
                None => absorb_missing(&mut output, &mut issues, key, schema.parse_missing(ctx)?),
            }
            if ctx.abort_early && !issues.is_empty() {
                break;
            }
        }

        Ok(Dataset {
            value: Value::Object(output),
            issues,
        })
    }

    async fn parse_async(&self, input: &Value, ctx: &ValidationContext) -> Result<Dataset> {
        let Some(map) = input.as_object() else {
            return Ok(self.type_issue(input));
        };

        let mut output = Map::new();
        let mut issues = Vec::new();
        for (key, schema) in &self.entries {
            match map.get(key) {
                Some(value) => {
                    let dataset = schema.parse_async(value, ctx).await?;
                    absorb(&mut output, &mut issues, key, dataset);
                }
                None => {
                    let dataset = schema.parse_missing_async(ctx).await?;
                    absorb_missing(&mut output, &mut issues, key, dataset);
                }
            }
            if ctx.abort_early && !issues.is_empty() {
                break;
            }
        }

        Ok(Dataset {
            value: Value::Object(output),
            issues,
        })
    }
}

/// Array whose items all match one schema
#[derive(Clone)]
pub struct ArraySchema {
    item: SchemaRef,
}

impl ArraySchema {
    pub fn new(item: SchemaRef) -> Self {
        Self { item }
    }

    fn type_issue(&self, input: &Value) -> Dataset {
        Dataset::from_issue(input.clone(), Issue::schema(SchemaKind::Array.as_str(), self.expects(), input))
    }
}

fn absorb_item(output: &mut Vec<Value>, issues: &mut Vec<Issue>, index: usize, dataset: Dataset) {
    issues.extend(dataset.issues.into_iter().map(|issue| issue.under(PathItem::Index(index))));
    output.push(dataset.value);
}

#[async_trait]
impl Schema for ArraySchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Array
    }

    fn expects(&self) -> String {
        "Array".to_string()
    }

    fn is_async(&self) -> bool {
        self.item.is_async()
    }

    fn parse(&self, input: &Value, ctx: &ValidationContext) -> Result<Dataset> {
        let Some(items) = input.as_array() else {
            return Ok(self.type_issue(input));
        };

        let mut output = Vec::with_capacity(items.len());
        let mut issues = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let dataset = self.item.parse(item, ctx)?;
            absorb_item(&mut output, &mut issues, index, dataset);
            if ctx.abort_early && !issues.is_empty() {
                break;
            }
        }

        Ok(Dataset {
            value: Value::Array(output),
            issues,
        })
    }

    async fn parse_async(&self, input: &Value, ctx: &ValidationContext) -> Result<Dataset> {
        let Some(items) = input.as_array() else {
            return Ok(self.type_issue(input));
        };

        let mut output = Vec::with_capacity(items.len());
        let mut issues = Vec::new();
        for (index, item) in items.iter().enumerate() {
            let dataset = self.item.parse_async(item, ctx).await?;
            absorb_item(&mut output, &mut issues, index, dataset);
            if ctx.abort_early && !issues.is_empty() {
                break;
            }
        }

        Ok(Dataset {
            value: Value::Array(output),
            issues,
        })
    }
}

/// Create an object schema from `(key, schema)` entries
pub fn object<K, I>(entries: I) -> SchemaRef
where
    K: Into<String>,
    I: IntoIterator<Item = (K, SchemaRef)>,
{
    Arc::new(ObjectSchema::new(entries))
}

/// Create an array schema
pub fn array(item: SchemaRef) -> SchemaRef {
    Arc::new(ArraySchema::new(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{lazy, number, optional, string};
    use serde_json::json;

    fn user() -> SchemaRef {
        object(vec![
            ("name", string()),
            ("age", number()),
            ("nickname", optional(string())),
        ])
    }

    #[test]
    fn test_valid_object_drops_unknown_keys() {
        let dataset = user()
            .parse(&json!({"name": "Ada", "age": 36, "extra": true}), &ValidationContext::new())
            .unwrap();
        assert!(dataset.is_valid());
        assert_eq!(dataset.value, json!({"name": "Ada", "age": 36}));
    }

    #[test]
    fn test_collects_all_issues() {
        let dataset = user()
            .parse(&json!({"name": 1, "nickname": 2}), &ValidationContext::new())
            .unwrap();
        let paths: Vec<String> = dataset.issues.iter().map(|i| i.path.to_string()).collect();
        assert_eq!(paths, vec!["name", "age", "nickname"]);
        assert_eq!(dataset.issues[1].received, "undefined");
    }

    #[test]
    fn test_missing_key_goes_through_wrappers() {
        let schema = object(vec![
            ("nickname", lazy(|_| optional(string()))),
            ("age", lazy(|_| number())),
        ]);
        let dataset = schema.parse(&json!({}), &ValidationContext::new()).unwrap();
        assert_eq!(dataset.issues.len(), 1);
        assert_eq!(dataset.issues[0].path.to_string(), "age");
        assert_eq!(dataset.issues[0].kind, "number");
        assert_eq!(dataset.value, json!({}));
    }

    #[test]
    fn test_abort_early() {
        let dataset = user().parse(&json!({"name": 1}), &ValidationContext::fail_fast()).unwrap();
        assert_eq!(dataset.issues.len(), 1);
        assert_eq!(dataset.issues[0].path.to_string(), "name");
    }

    #[test]
    fn test_not_an_object() {
        let dataset = user().parse(&json!([1]), &ValidationContext::new()).unwrap();
        assert_eq!(dataset.issues.len(), 1);
        assert_eq!(dataset.issues[0].expected.as_deref(), Some("Object"));
        assert_eq!(dataset.issues[0].received, "Array");
    }

    #[test]
    fn test_array_paths() {
        let schema = array(object(vec![("id", number())]));
        let dataset = schema
            .parse(&json!([{"id": 1}, {"id": "2"}, {"id": 3}]), &ValidationContext::new())
            .unwrap();
        assert_eq!(dataset.issues.len(), 1);
        assert_eq!(dataset.issues[0].path.to_string(), "1.id");
    }
}

//! Lazy schemas
//!
//! A lazy schema holds a getter instead of a schema. The getter runs on every
//! parse call, receives the input, and returns the schema to delegate to.
//! Because the target is looked up only at parse time, a schema can refer to
//! itself or to schemas defined after it:
//!
//! ```
//! use std::sync::Arc;
//! use familiar_validation::schema::{lazy_weak, nullable, number, ObjectSchema};
//!
//! let node = Arc::new_cyclic(|this| {
//!     ObjectSchema::new(vec![
//!         ("value", number()),
//!         ("next", nullable(lazy_weak(this.clone()))),
//!     ])
//! });
//! ```
//!
//! The getter result is never cached. Delegation is exact: the target's
//! dataset or error is returned as is. An absent value (a missing object
//! key) is delegated too, with the getter receiving `null` as its input.
//!
//! `lazy` is synchronous only and fails fast if its getter returns an
//! asynchronous schema. Use `lazy_async` when the target may need to
//! suspend; that wrapper is itself asynchronous.

use std::sync::{Arc, Weak};

use async_trait::async_trait;
use serde_json::Value;
use tracing::trace;

use super::{Dataset, Schema, SchemaKind, SchemaRef};
use crate::context::ValidationContext;
use crate::error::{Result, ValidationError};

type Getter = dyn Fn(&Value) -> Result<SchemaRef> + Send + Sync;

/// Synchronous lazy schema
#[derive(Clone)]
pub struct LazySchema {
    getter: Arc<Getter>,
}

impl LazySchema {
    /// Create from an infallible getter
    pub fn new<F>(getter: F) -> Self
    where
        F: Fn(&Value) -> SchemaRef + Send + Sync + 'static,
    {
        Self::try_new(move |input| Ok(getter(input)))
    }

    /// Create from a getter that may fail to produce a schema
    pub fn try_new<F>(getter: F) -> Self
    where
        F: Fn(&Value) -> Result<SchemaRef> + Send + Sync + 'static,
    {
        Self {
            getter: Arc::new(getter),
        }
    }

    /// Run the getter for `input`
    pub fn resolve(&self, input: &Value) -> Result<SchemaRef> {
        (self.getter)(input)
    }

    fn resolve_sync(&self, input: &Value) -> Result<SchemaRef> {
        let target = self.resolve(input)?;
        if target.is_async() {
            return Err(ValidationError::AsyncTargetInSyncLazy {
                kind: target.kind().as_str(),
            });
        }
        Ok(target)
    }
}

impl Schema for LazySchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Lazy
    }

    fn expects(&self) -> String {
        "unknown".to_string()
    }

    fn parse(&self, input: &Value, ctx: &ValidationContext) -> Result<Dataset> {
        let target = self.resolve_sync(input)?;
        trace!(resolved = %target.kind(), "Resolved lazy schema");
        target.parse(input, ctx)
    }

    fn parse_missing(&self, ctx: &ValidationContext) -> Result<Option<Dataset>> {
        let target = self.resolve_sync(&Value::Null)?;
        target.parse_missing(ctx)
    }
}

/// Lazy schema whose target may be asynchronous
#[derive(Clone)]
pub struct LazyAsyncSchema {
    getter: Arc<Getter>,
}

impl LazyAsyncSchema {
    /// Create from an infallible getter
    pub fn new<F>(getter: F) -> Self
    where
        F: Fn(&Value) -> SchemaRef + Send + Sync + 'static,
    {
        Self::try_new(move |input| Ok(getter(input)))
    }

    /// Create from a getter that may fail to produce a schema
    pub fn try_new<F>(getter: F) -> Self
    where
        F: Fn(&Value) -> Result<SchemaRef> + Send + Sync + 'static,
    {
        Self {
            getter: Arc::new(getter),
        }
    }

    /// Run the getter for `input`
    pub fn resolve(&self, input: &Value) -> Result<SchemaRef> {
        (self.getter)(input)
    }
}

#[async_trait]
impl Schema for LazyAsyncSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Lazy
    }

    fn expects(&self) -> String {
        "unknown".to_string()
    }

    fn is_async(&self) -> bool {
        true
    }

    fn parse(&self, _input: &Value, _ctx: &ValidationContext) -> Result<Dataset> {
        Err(ValidationError::AsyncSchemaInSyncParse {
            kind: SchemaKind::Lazy.as_str(),
        })
    }

    async fn parse_async(&self, input: &Value, ctx: &ValidationContext) -> Result<Dataset> {
        let target = self.resolve(input)?;
        trace!(resolved = %target.kind(), is_async = target.is_async(), "Resolved lazy schema");
        target.parse_async(input, ctx).await
    }

    fn parse_missing(&self, _ctx: &ValidationContext) -> Result<Option<Dataset>> {
        Err(ValidationError::AsyncSchemaInSyncParse {
            kind: SchemaKind::Lazy.as_str(),
        })
    }

    async fn parse_missing_async(&self, ctx: &ValidationContext) -> Result<Option<Dataset>> {
        let target = self.resolve(&Value::Null)?;
        target.parse_missing_async(ctx).await
    }
}

/// Create a lazy schema
pub fn lazy<F>(getter: F) -> SchemaRef
where
    F: Fn(&Value) -> SchemaRef + Send + Sync + 'static,
{
    Arc::new(LazySchema::new(getter))
}

/// Create a lazy schema from a fallible getter. A getter error aborts the
/// parse call unchanged.
pub fn try_lazy<F>(getter: F) -> SchemaRef
where
    F: Fn(&Value) -> Result<SchemaRef> + Send + Sync + 'static,
{
    Arc::new(LazySchema::try_new(getter))
}

/// Create a lazy schema that may resolve to an asynchronous schema
pub fn lazy_async<F>(getter: F) -> SchemaRef
where
    F: Fn(&Value) -> SchemaRef + Send + Sync + 'static,
{
    Arc::new(LazyAsyncSchema::new(getter))
}

/// Fallible variant of [`lazy_async`]
pub fn try_lazy_async<F>(getter: F) -> SchemaRef
where
    F: Fn(&Value) -> Result<SchemaRef> + Send + Sync + 'static,
{
    Arc::new(LazyAsyncSchema::try_new(getter))
}

/// Create a lazy schema pointing at a schema it does not own.
///
/// Resolution fails once the target has been dropped.
pub fn lazy_weak<S>(target: Weak<S>) -> SchemaRef
where
    S: Schema + 'static,
{
    try_lazy(move |_| {
        target
            .upgrade()
            .map(|schema| schema as SchemaRef)
            .ok_or_else(|| ValidationError::resolution("target schema was dropped"))
    })
}

/// See [`lazy`]
#[deprecated(since = "0.1.0", note = "use `lazy` instead")]
pub fn recursive<F>(getter: F) -> SchemaRef
where
    F: Fn(&Value) -> SchemaRef + Send + Sync + 'static,
{
    lazy(getter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{number, string};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_lazy_shape() {
        let schema = lazy(|_| number());
        assert_eq!(schema.kind(), SchemaKind::Lazy);
        assert_eq!(schema.expects(), "unknown");
        assert!(!schema.is_async());

        let schema = lazy_async(|_| number());
        assert_eq!(schema.kind(), SchemaKind::Lazy);
        assert!(schema.is_async());
    }

    #[test]
    fn test_getter_receives_input() {
        let schema = lazy(|input| if input.is_string() { string() } else { number() });
        let ctx = ValidationContext::new();
        assert!(schema.parse(&json!("a"), &ctx).unwrap().is_valid());
        assert!(schema.parse(&json!(1), &ctx).unwrap().is_valid());
        assert!(!schema.parse(&json!(true), &ctx).unwrap().is_valid());
    }

    #[test]
    fn test_getter_runs_once_per_parse() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let schema = lazy(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            number()
        });
        let ctx = ValidationContext::new();
        for expected in 1..=3 {
            schema.parse(&json!(7), &ctx).unwrap();
            assert_eq!(calls.load(Ordering::SeqCst), expected);
        }
    }

    #[test]
    fn test_getter_failure_propagates() {
        let schema = try_lazy(|_| Err(ValidationError::resolution("no schema")));
        let result = schema.parse(&json!(1), &ValidationContext::new());
        assert!(matches!(result, Err(ValidationError::ResolutionFailure(msg)) if msg == "no schema"));
    }

    #[test]
    fn test_sync_lazy_rejects_async_target() {
        let schema = lazy(|_| lazy_async(|_| number()));
        let result = schema.parse(&json!(1), &ValidationContext::new());
        assert!(matches!(
            result,
            Err(ValidationError::AsyncTargetInSyncLazy { kind: "lazy" })
        ));
    }

    #[test]
    fn test_lazy_weak_dropped_target() {
        let target: Arc<LazySchema> = Arc::new(LazySchema::new(|_| number()));
        let schema = lazy_weak(Arc::downgrade(&target));
        assert!(schema.parse(&json!(1), &ValidationContext::new()).unwrap().is_valid());

        drop(target);
        let result = schema.parse(&json!(1), &ValidationContext::new());
        assert!(matches!(result, Err(ValidationError::ResolutionFailure(_))));
    }

    #[test]
    #[allow(deprecated)]
    fn test_recursive_alias() {
        let schema = recursive(|_| number());
        assert_eq!(schema.kind(), SchemaKind::Lazy);
        assert_eq!(schema.expects(), "unknown");
        assert!(schema.parse(&json!(1), &ValidationContext::new()).unwrap().is_valid());
    }
}

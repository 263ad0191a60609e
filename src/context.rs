//! Parse-time configuration shared by every schema in a graph

use serde::{Deserialize, Serialize};

/// Options passed unchanged through one parse call's delegation chain.
///
/// Schemas read these flags; nothing in the crate mutates a context once
/// a parse call has started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationContext {
    /// Stop at the first issue instead of collecting all of them
    #[serde(default)]
    pub abort_early: bool,
    /// Stop a pipe at its first failing action
    #[serde(default)]
    pub abort_pipe_early: bool,
}

impl ValidationContext {
    /// Create a context that collects every issue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that stops at the first issue
    pub fn fail_fast() -> Self {
        Self {
            abort_early: true,
            abort_pipe_early: true,
        }
    }

    /// Set the abort-early flag
    pub fn with_abort_early(mut self, abort_early: bool) -> Self {
        self.abort_early = abort_early;
        self
    }

    /// Set the abort-pipe-early flag
    pub fn with_abort_pipe_early(mut self, abort_pipe_early: bool) -> Self {
        self.abort_pipe_early = abort_pipe_early;
        self
    }
}

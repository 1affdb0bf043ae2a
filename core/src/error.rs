//! Error type for the depth-limited entry points.
//!
//! Folds and rewrites are total over well-formed trees, so the only error is
//! a resource limit chosen by the caller.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A tree is nested more deeply than [`Limits::max_depth`](crate::Limits::max_depth).
    #[error("tree nesting depth exceeds maximum of {limit} levels")]
    DepthExceeded { limit: usize },
}

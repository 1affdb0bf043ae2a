//! Depth-limited entry points.
//!
//! The recursive engines use one native stack frame per tree level. These
//! functions measure the tree on explicit stacks first and refuse trees that
//! are nested more deeply than the caller allows.

use crate::error::Error;
use crate::limits::Limits;
use crate::traversal::{Fold, FoldStep, drive_fold};
use crate::tree::{Expr, Tree};

use super::{count, flatten};

struct DepthGuard {
    limit: usize,
    /// Nesting depth of the node being visited.
    current_depth: usize,
    visited: usize,
}

impl DepthGuard {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            current_depth: 0,
            visited: 0,
        }
    }
}

// Visits are pre-order and every visited node is combined before its next
// sibling is visited, so nodes visited but not yet combined form the path
// from the root to the current node.
impl Fold for DepthGuard {
    type Output = usize;
    type Error = Error;

    fn visit(&mut self, _tree: &Tree) -> Result<FoldStep<usize>, Error> {
        self.visited += 1;
        if self.current_depth >= self.limit {
            return Err(Error::DepthExceeded { limit: self.limit });
        }
        self.current_depth += 1;
        Ok(FoldStep::Recurse)
    }

    fn combine(&mut self, _tree: &Tree, layer: Expr<usize>) -> Result<usize, Error> {
        self.current_depth -= 1;
        Ok(1 + layer.children().copied().max().unwrap_or(0))
    }
}

/// Measure the depth of a tree, failing if it exceeds `limits.max_depth`.
///
/// Never recurses on the native stack, so it is safe on any input. Stops at
/// the first node nested deeper than the limit, without walking the rest.
pub fn check_depth(tree: &Tree, limits: &Limits) -> Result<usize, Error> {
    let result = drive_fold(tree, DepthGuard::new(limits.max_depth));
    match &result {
        Ok(depth) => tracing::debug!(depth, max_depth = limits.max_depth, "Tree depth checked"),
        Err(err) => tracing::debug!(error = %err, "Tree rejected"),
    }
    result
}

/// [`flatten`] for trees no deeper than `limits.max_depth`.
pub fn flatten_checked(tree: &Tree, limits: &Limits) -> Result<Tree, Error> {
    check_depth(tree, limits)?;
    Ok(flatten(tree))
}

/// [`count`] for trees no deeper than `limits.max_depth`.
pub fn count_checked(tree: &Tree, limits: &Limits) -> Result<usize, Error> {
    check_depth(tree, limits)?;
    Ok(count(tree))
}

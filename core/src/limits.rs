//! Resource limits for the recursive traversals.

/// Default maximum tree depth accepted by the checked entry points.
///
/// This keeps the recursive engines well clear of the native stack limit
/// for trees like `(((((...(1)...)))))`.
pub const DEFAULT_MAX_DEPTH: usize = 500;

/// Limits applied before running a recursive traversal.
///
/// # Example
///
/// ```
/// use exprfold_core::{Limits, Tree, algo};
///
/// let limits = Limits { max_depth: 2 };
/// let tree = Tree::paren(Tree::paren(Tree::int(1)));
/// assert!(algo::flatten_checked(&tree, &limits).is_err());
/// assert!(algo::flatten_checked(&tree, &Limits::default()).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of nodes on any root-to-leaf path.
    ///
    /// Default: 500
    pub max_depth: usize,
}

impl Limits {
    /// Accept trees of any depth.
    pub fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

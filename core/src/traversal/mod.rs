//! Whole-tree traversals derived from [`Expr::fmap`](crate::Expr::fmap).
//!
//! This module provides three recursion schemes:
//! - [`cata`]: a bottom-up fold that collapses a tree into a single value
//! - [`bottom_up`] / [`top_down`]: node-local rewrites applied across a tree
//! - [`drive_fold`]: a stack-based fold with pruning and replacement, for
//!   trees too deep for native recursion
//!
//! # Example
//!
//! ```
//! use exprfold_core::{Expr, Tree, cata};
//!
//! let tree = Tree::call(Tree::ident("f"), [Tree::int(1), Tree::int(2)]);
//! let leaves = cata(&tree, |layer: Expr<usize>| match layer {
//!     Expr::Literal(_) => 1,
//!     other => other.children().sum(),
//! });
//! assert_eq!(leaves, 3);
//! ```

mod drive;
mod fold;
mod rewrite;

pub use drive::{Fold, FoldStep, drive_cata, drive_fold};
pub use fold::cata;
pub use rewrite::{bottom_up, bottom_up_via_cata, top_down};

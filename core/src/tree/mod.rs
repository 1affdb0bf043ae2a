//! Expression tree data model.
//!
//! - [`Lit`]: terminal literal payloads
//! - [`Expr<T>`]: one level of tree shape, generic over the child type
//! - [`Tree`] and [`ExprNode`]: the recursive tree, where every child is itself a [`Tree`]
//! - [`ExprFlags`]: cached subtree properties for cheap queries
//!
//! See the [`traversal`](crate::traversal) module for folds and rewrites.

mod expr;
mod flags;
mod lit;
mod node;

pub use expr::{Children, Expr, ExprTag};
pub use flags::ExprFlags;
pub use lit::Lit;
pub use node::{ExprNode, Tree};

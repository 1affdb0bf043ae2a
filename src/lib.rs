//! exprfold - expression trees with generic recursion schemes
//!
//! # Overview
//!
//! A small expression language AST (`Index`, `Call`, `Unary`, `Binary`,
//! `Paren`, `Literal`) whose node type is parameterized over its children.
//! One structural map over a single level is enough to derive:
//!
//! - folds that collapse a tree into a value ([`cata`], [`drive_cata`])
//! - rewrites applied bottom-up or top-down ([`bottom_up`], [`top_down`])
//! - visitor-style folds with pruning and early exit ([`drive_fold`])
//!
//! # Quick Start
//!
//! ```
//! use exprfold::{Expr, Tree, algo, cata, expr};
//!
//! // ((1 + (2)))
//! let tree = expr!(paren (paren (binary (int 1) "+" (paren (int 2)))));
//! assert_eq!(algo::count(&tree), 6);
//!
//! let flat = algo::flatten(&tree);
//! assert_eq!(flat, Tree::binary(Tree::int(1), "+", Tree::int(2)));
//!
//! // Any other fold is just an algebra over one layer.
//! let sum = cata(&flat, |layer: Expr<i64>| match layer {
//!     Expr::Literal(lit) => lit.as_int().unwrap_or(0),
//!     other => other.children().sum(),
//! });
//! assert_eq!(sum, 3);
//! ```
//!
//! # Deep trees
//!
//! [`cata`], [`bottom_up`] and [`top_down`] recurse once per tree level.
//! For untrusted input, measure the tree first with [`algo::check_depth`]
//! or use the `*_checked` entry points, which reject trees deeper than
//! [`Limits::max_depth`]:
//!
//! ```
//! use exprfold::{Error, Limits, Tree, algo};
//!
//! let deep = (0..10).fold(Tree::int(0), |tree, _| Tree::paren(tree));
//! let limits = Limits { max_depth: 8 };
//! assert_eq!(
//!     algo::flatten_checked(&deep, &limits),
//!     Err(Error::DepthExceeded { limit: 8 })
//! );
//! ```

pub use exprfold_core::*;

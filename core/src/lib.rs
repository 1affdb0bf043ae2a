//! Expression trees with generic recursion schemes.
//!
//! The crate separates one level of tree shape ([`Expr<T>`]) from the place
//! where recursion happens ([`Tree`]). A single structural map,
//! [`Expr::fmap`], is enough to derive every whole-tree operation:
//!
//! - [`cata`]: fold a tree bottom-up into a single value
//! - [`bottom_up`] / [`top_down`]: rewrite a tree with a node-local function
//! - [`drive_fold`]: the same fold, driven by explicit stacks
//!
//! # Example
//!
//! ```
//! use exprfold_core::{algo, expr};
//!
//! let tree = expr!(paren (paren (binary (int 1) "+" (paren (int 2)))));
//! assert_eq!(algo::count(&tree), 6);
//!
//! let flat = algo::flatten(&tree);
//! assert_eq!(flat, expr!(binary (int 1) "+" (int 2)));
//! assert_eq!(algo::count(&flat), 3);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod algo;
pub mod error;
pub mod fixed;
pub mod limits;
mod macros;
pub mod traversal;
pub mod tree;

pub use error::Error;
pub use limits::{DEFAULT_MAX_DEPTH, Limits};
pub use traversal::{
    Fold, FoldStep, bottom_up, bottom_up_via_cata, cata, drive_cata, drive_fold, top_down,
};
pub use tree::{Children, Expr, ExprFlags, ExprNode, ExprTag, Lit, Tree};

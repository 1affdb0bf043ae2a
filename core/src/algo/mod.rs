//! Concrete algorithms built on the traversal schemes.
//!
//! - [`flatten`]: remove every `Paren` wrapper
//! - [`count`], [`depth`], [`count_parens`]: folds into a single number
//! - [`check_depth`] and the `*_checked` entry points: depth-limited variants

mod checked;
mod count;
mod flatten;

pub use checked::{check_depth, count_checked, flatten_checked};
pub use count::{count, count_node, count_parens, depth};
pub use flatten::{flatten, flatten_top_down, flatten_via_cata, strip_parens, unwrap_paren};

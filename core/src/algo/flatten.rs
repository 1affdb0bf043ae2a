//! Paren removal.
//!
//! Parentheses carry no meaning once a tree is built, so `flatten` drops
//! every `Paren` node and keeps everything else as-is. Three formulations
//! are provided and always agree:
//!
//! - [`flatten`]: [`bottom_up`] with [`strip_parens`]
//! - [`flatten_via_cata`]: [`cata`] folding straight into a [`Tree`]
//! - [`flatten_top_down`]: [`top_down`] with [`strip_parens`]
//!
//! [`unwrap_paren`] is the plain one-level rule; it only flattens fully
//! when applied bottom-up.

use crate::traversal::{bottom_up, cata, top_down};
use crate::tree::{Expr, Tree};

/// Node-local rule: replace a `Paren` with the layer it wraps, one level only.
///
/// Enough for [`bottom_up`], where the wrapped layer is already paren-free.
/// Under [`top_down`] it leaves `((x))` as `(x)`, since the traversal moves
/// on to the children of the unwrapped node.
pub fn unwrap_paren(layer: Expr<Tree>) -> Expr<Tree> {
    match layer {
        Expr::Paren(inner) => inner.into_kind(),
        other => other,
    }
}

/// Node-local rule: replace a run of `Paren` wrappers with the layer inside.
///
/// Stronger than [`unwrap_paren`]: `((x))` becomes `x` in a single
/// application, so the rule removes every paren under [`top_down`] as well
/// as [`bottom_up`]. Any other node is returned unchanged.
pub fn strip_parens(mut layer: Expr<Tree>) -> Expr<Tree> {
    loop {
        match layer {
            Expr::Paren(inner) => layer = inner.into_kind(),
            other => return other,
        }
    }
}

/// Remove every `Paren` node from a tree.
///
/// A tree without parens is returned as-is (sharing the same nodes).
///
/// # Example
///
/// ```
/// use exprfold_core::{Tree, algo};
///
/// let tree = Tree::paren(Tree::binary(Tree::int(1), "+", Tree::paren(Tree::int(2))));
/// let flat = algo::flatten(&tree);
/// assert_eq!(flat, Tree::binary(Tree::int(1), "+", Tree::int(2)));
/// assert!(!flat.contains_paren());
/// ```
pub fn flatten(tree: &Tree) -> Tree {
    if !tree.contains_paren() {
        return tree.clone();
    }
    bottom_up(tree, strip_parens)
}

/// [`flatten`] written directly as a fold into [`Tree`].
pub fn flatten_via_cata(tree: &Tree) -> Tree {
    cata(tree, |layer| Tree::new(strip_parens(layer)))
}

/// [`flatten`] applied from the root down.
pub fn flatten_top_down(tree: &Tree) -> Tree {
    top_down(tree, strip_parens)
}

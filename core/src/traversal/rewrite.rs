//! Whole-tree rewrites built from a node-local rewrite function.

use super::fold::cata;
use crate::tree::{Expr, Tree};

/// Rewrite a tree bottom-up (post-order).
///
/// All children are rewritten first, then `f` is applied once to the node
/// whose children are already rewritten. `f` never observes an unrewritten
/// subtree below the current node.
pub fn bottom_up(tree: &Tree, mut f: impl FnMut(Expr<Tree>) -> Expr<Tree>) -> Tree {
    bottom_up_with(tree, &mut f)
}

fn bottom_up_with<F>(tree: &Tree, f: &mut F) -> Tree
where
    F: FnMut(Expr<Tree>) -> Expr<Tree>,
{
    let layer = tree.kind().map_ref(|child| bottom_up_with(child, &mut *f));
    Tree::new(f(layer))
}

/// [`bottom_up`] expressed as a [`cata`] whose result type is the tree itself.
///
/// Behaves identically to [`bottom_up`] for every input.
pub fn bottom_up_via_cata(tree: &Tree, mut f: impl FnMut(Expr<Tree>) -> Expr<Tree>) -> Tree {
    cata(tree, |layer| Tree::new(f(layer)))
}

/// Rewrite a tree top-down (pre-order).
///
/// `f` is applied to the node with its original children first. The
/// traversal then descends into the children of the node `f` returned, not
/// into the original ones, so structure introduced by `f` is rewritten too.
pub fn top_down(tree: &Tree, mut f: impl FnMut(Expr<Tree>) -> Expr<Tree>) -> Tree {
    top_down_with(tree, &mut f)
}

fn top_down_with<F>(tree: &Tree, f: &mut F) -> Tree
where
    F: FnMut(Expr<Tree>) -> Expr<Tree>,
{
    let rewritten = f(tree.kind().clone());
    Tree::new(rewritten.fmap(|child| top_down_with(&child, &mut *f)))
}

//! Generic fold (catamorphism) over expression trees.

use crate::tree::{Expr, Tree};

/// Collapse a tree into a single value, bottom-up.
///
/// Every child is folded first, through [`Expr::map_ref`], and the
/// resulting `Expr<R>` layer is handed to `algebra`. For any node, all of its
/// descendants are folded before its own algebra call.
///
/// Recursion depth equals tree depth. See [`drive_cata`](super::drive_cata)
/// for a variant that does not use the native stack.
pub fn cata<R>(tree: &Tree, mut algebra: impl FnMut(Expr<R>) -> R) -> R {
    cata_with(tree, &mut algebra)
}

fn cata_with<R, F>(tree: &Tree, algebra: &mut F) -> R
where
    F: FnMut(Expr<R>) -> R,
{
    let layer = tree.kind().map_ref(|child| cata_with(child, &mut *algebra));
    algebra(layer)
}

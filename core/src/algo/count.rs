//! Folds that collapse a tree into a number.

use crate::traversal::cata;
use crate::tree::{Expr, Tree};

/// Algebra for [`count`]: one for the node itself plus its children's counts.
pub fn count_node(layer: Expr<usize>) -> usize {
    match layer {
        Expr::Index { target, index } => 1 + target + index,
        Expr::Call { func, args } => 1 + func + args.iter().sum::<usize>(),
        Expr::Unary { operand, .. } => 1 + operand,
        Expr::Binary { lhs, rhs, .. } => 1 + lhs + rhs,
        Expr::Paren(inner) => 1 + inner,
        Expr::Literal(_) => 1,
    }
}

/// Total number of nodes, literals and parens included.
pub fn count(tree: &Tree) -> usize {
    cata(tree, count_node)
}

/// Number of nodes on the longest root-to-leaf path. A single literal has depth 1.
pub fn depth(tree: &Tree) -> usize {
    cata(tree, |layer: Expr<usize>| {
        1 + layer.children().copied().max().unwrap_or(0)
    })
}

pub fn count_parens(tree: &Tree) -> usize {
    cata(tree, |layer: Expr<usize>| {
        usize::from(layer.is_paren()) + layer.children().sum::<usize>()
    })
}

use bitflags::bitflags;

use super::expr::Expr;
use super::node::Tree;

bitflags! {
    /// Properties of a whole subtree.
    ///
    /// Computed once when a node is built, from the node's own variant and
    /// the flags of its children, so queries never walk the tree.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct ExprFlags: u8 {
        /// The subtree contains at least one `Paren` node.
        const HAS_PAREN = 1;
        /// The subtree contains at least one `Call` node.
        const HAS_CALL = 1 << 1;
    }
}

impl Expr<Tree> {
    pub fn compute_flags(&self) -> ExprFlags {
        let own = match self {
            Expr::Paren(_) => ExprFlags::HAS_PAREN,
            Expr::Call { .. } => ExprFlags::HAS_CALL,
            Expr::Index { .. } | Expr::Unary { .. } | Expr::Binary { .. } | Expr::Literal(_) => {
                ExprFlags::empty()
            }
        };
        self.children().fold(own, |acc, child| acc | child.flags())
    }
}

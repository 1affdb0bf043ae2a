//! Fixed-shape expression tree.
//!
//! [`Node`] owns its children directly, so every whole-tree operation has to
//! spell out its own recursion through [`Node::map_children`]. It is kept as
//! a reference model for [`Tree`]: both represent the same expressions and
//! convert into each other without loss.

use alloc::boxed::Box;
use alloc::vec::Vec;
use ecow::EcoString;

use crate::traversal::cata;
use crate::tree::{Expr, Lit, Tree};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Index { target: Box<Node>, index: Box<Node> },
    Call { func: Box<Node>, args: Vec<Node> },
    Unary { op: EcoString, operand: Box<Node> },
    Binary { lhs: Box<Node>, op: EcoString, rhs: Box<Node> },
    Paren(Box<Node>),
    Literal(Lit),
}

static_assertions::assert_impl_all!(Node: Send, Sync);
static_assertions::assert_not_impl_any!(Tree: Send, Sync);

impl Node {
    /// Rewrite the direct children with `f`, in definition order.
    ///
    /// A `Literal` is returned as-is.
    pub fn map_children(self, mut f: impl FnMut(Node) -> Node) -> Node {
        match self {
            Node::Index { target, index } => {
                let target = Box::new(f(*target));
                let index = Box::new(f(*index));
                Node::Index { target, index }
            }
            Node::Call { func, args } => {
                let func = Box::new(f(*func));
                let args = args.into_iter().map(&mut f).collect();
                Node::Call { func, args }
            }
            Node::Unary { op, operand } => Node::Unary {
                op,
                operand: Box::new(f(*operand)),
            },
            Node::Binary { lhs, op, rhs } => {
                let lhs = Box::new(f(*lhs));
                let rhs = Box::new(f(*rhs));
                Node::Binary { lhs, op, rhs }
            }
            Node::Paren(inner) => Node::Paren(Box::new(f(*inner))),
            Node::Literal(lit) => Node::Literal(lit),
        }
    }

    fn from_layer(layer: Expr<Node>) -> Node {
        match layer {
            Expr::Index { target, index } => Node::Index {
                target: Box::new(target),
                index: Box::new(index),
            },
            Expr::Call { func, args } => Node::Call {
                func: Box::new(func),
                args,
            },
            Expr::Unary { op, operand } => Node::Unary {
                op,
                operand: Box::new(operand),
            },
            Expr::Binary { lhs, op, rhs } => Node::Binary {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
            },
            Expr::Paren(inner) => Node::Paren(Box::new(inner)),
            Expr::Literal(lit) => Node::Literal(lit),
        }
    }
}

/// Remove every `Paren` node.
pub fn flatten(node: Node) -> Node {
    match node {
        Node::Paren(inner) => flatten(*inner),
        other => other.map_children(flatten),
    }
}

impl From<&Node> for Tree {
    fn from(node: &Node) -> Self {
        match node {
            Node::Index { target, index } => {
                Tree::index(Tree::from(&**target), Tree::from(&**index))
            }
            Node::Call { func, args } => {
                Tree::call(Tree::from(&**func), args.iter().map(Tree::from))
            }
            Node::Unary { op, operand } => Tree::unary(op.clone(), Tree::from(&**operand)),
            Node::Binary { lhs, op, rhs } => {
                Tree::binary(Tree::from(&**lhs), op.clone(), Tree::from(&**rhs))
            }
            Node::Paren(inner) => Tree::paren(Tree::from(&**inner)),
            Node::Literal(lit) => Tree::lit(lit.clone()),
        }
    }
}

impl From<&Tree> for Node {
    fn from(tree: &Tree) -> Self {
        cata(tree, Node::from_layer)
    }
}

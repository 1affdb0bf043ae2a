use alloc::rc::Rc;
use alloc::vec::Vec;
use core::{fmt, hash, mem};
use ecow::EcoString;

use super::expr::Expr;
use super::flags::ExprFlags;
use super::lit::Lit;

/// Handle to an immutable expression tree.
///
/// Every child of a `Tree` is itself a `Tree`, so a whole tree is an
/// `Expr<Tree>` layer at each level. Handles are reference counted: cloning
/// is cheap, and rewrites may share unchanged subtrees with their input.
/// Since nodes are never mutated, sharing is not observable and equality is
/// always structural.
///
/// # Example
///
/// ```
/// use exprfold_core::{Expr, Tree};
///
/// let sum = Tree::binary(Tree::int(1), "+", Tree::paren(Tree::int(2)));
/// assert!(sum.contains_paren());
/// assert!(matches!(sum.kind(), Expr::Binary { .. }));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tree(Rc<ExprNode>);

static_assertions::assert_eq_size!(Tree, usize);

impl Tree {
    pub fn new(kind: Expr<Tree>) -> Self {
        Self(Rc::new(ExprNode::new(kind)))
    }

    pub fn node(&self) -> &ExprNode {
        &self.0
    }

    pub fn kind(&self) -> &Expr<Tree> {
        self.node().kind()
    }

    /// Take the top layer out of the tree.
    ///
    /// Moves the layer when this handle is the only owner, and clones it
    /// (cheaply, children are handles) otherwise.
    pub fn into_kind(self) -> Expr<Tree> {
        Rc::unwrap_or_clone(self.0).into_kind()
    }

    pub fn flags(&self) -> ExprFlags {
        self.node().flags()
    }

    pub fn contains_paren(&self) -> bool {
        self.flags().contains(ExprFlags::HAS_PAREN)
    }

    /// Whether both handles point to the same node.
    pub fn ptr_eq(&self, other: &Tree) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    // === Constructors ===

    pub fn lit(lit: Lit) -> Self {
        Self::new(Expr::Literal(lit))
    }

    pub fn int(value: i64) -> Self {
        Self::lit(Lit::Int(value))
    }

    pub fn str(text: impl Into<EcoString>) -> Self {
        Self::lit(Lit::str(text))
    }

    pub fn ident(name: impl Into<EcoString>) -> Self {
        Self::lit(Lit::ident(name))
    }

    pub fn index(target: Tree, index: Tree) -> Self {
        Self::new(Expr::Index { target, index })
    }

    pub fn call(func: Tree, args: impl IntoIterator<Item = Tree>) -> Self {
        Self::new(Expr::Call {
            func,
            args: args.into_iter().collect(),
        })
    }

    pub fn unary(op: impl Into<EcoString>, operand: Tree) -> Self {
        Self::new(Expr::Unary {
            op: op.into(),
            operand,
        })
    }

    pub fn binary(lhs: Tree, op: impl Into<EcoString>, rhs: Tree) -> Self {
        Self::new(Expr::Binary {
            lhs,
            op: op.into(),
            rhs,
        })
    }

    pub fn paren(inner: Tree) -> Self {
        Self::new(Expr::Paren(inner))
    }
}

impl From<Expr<Tree>> for Tree {
    fn from(kind: Expr<Tree>) -> Self {
        Self::new(kind)
    }
}

impl From<Lit> for Tree {
    fn from(lit: Lit) -> Self {
        Self::lit(lit)
    }
}

// Print the layer directly, so nested trees read like plain enums.
impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.kind(), f)
    }
}

/// A node of a [`Tree`]: its layer plus cached [`ExprFlags`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprNode(ExprFlags, Expr<Tree>);

impl ExprNode {
    pub fn new(kind: Expr<Tree>) -> Self {
        let flags = kind.compute_flags();
        Self(flags, kind)
    }

    pub fn flags(&self) -> ExprFlags {
        self.0
    }

    pub fn kind(&self) -> &Expr<Tree> {
        &self.1
    }

    pub fn into_kind(mut self) -> Expr<Tree> {
        mem::replace(&mut self.1, Expr::Literal(Lit::Int(0)))
    }

    /// Move the children out, leaving a childless placeholder layer behind.
    fn take_children(&mut self, pending: &mut Vec<Tree>) {
        let layer = mem::replace(&mut self.1, Expr::Literal(Lit::Int(0)));
        layer.fmap(|child| pending.push(child));
    }
}

// Tear down on a heap worklist. The derived drop would recurse once per
// level and overflow the native stack on deep trees.
impl Drop for ExprNode {
    fn drop(&mut self) {
        if self.1.children().all(|child| Rc::strong_count(&child.0) > 1) {
            return;
        }
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(tree) = pending.pop() {
            // Shared nodes are only released here; their owners drop them.
            if let Some(mut node) = Rc::into_inner(tree.0) {
                node.take_children(&mut pending);
            }
        }
    }
}

impl hash::Hash for ExprNode {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        // Flags are computed from the kind, so we don't need to hash them.
        self.kind().hash(state);
    }
}

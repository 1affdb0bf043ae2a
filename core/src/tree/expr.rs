use alloc::vec::Vec;
use ecow::EcoString;

use super::lit::Lit;

/// One level of an expression tree.
///
/// `T` is the type of the children. Whole trees use `Expr<Tree>`; folds
/// produce transient layers such as `Expr<usize>`, where every child has
/// already been collapsed into a result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr<T> {
    /// `target[index]`
    Index { target: T, index: T },

    /// `func(args...)`. Argument order is significant and the list may be empty.
    Call { func: T, args: Vec<T> },

    /// Prefix operator such as `-` or `!`.
    Unary { op: EcoString, operand: T },

    /// Infix operator.
    Binary { lhs: T, op: EcoString, rhs: T },

    /// Explicit parenthesization. Purely syntactic.
    Paren(T),

    /// Leaf node. Never holds a child.
    Literal(Lit),
}

/// Variant of an [`Expr`] without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExprTag {
    Index,
    Call,
    Unary,
    Binary,
    Paren,
    Literal,
}

impl<T> Expr<T> {
    /// Replace every direct child with `f(child)`, keeping the shape.
    ///
    /// Operator tags, argument order and literal payloads are preserved.
    /// `f` is applied exactly once per direct child, in definition order
    /// (see [`Expr::children`]), and never to grandchildren.
    ///
    /// # Example
    ///
    /// ```
    /// use exprfold_core::Expr;
    ///
    /// let call = Expr::Call { func: 1, args: vec![2, 3] };
    /// let doubled = call.fmap(|n| n * 2);
    /// assert_eq!(doubled, Expr::Call { func: 2, args: vec![4, 6] });
    /// ```
    pub fn fmap<R>(self, mut f: impl FnMut(T) -> R) -> Expr<R> {
        match self {
            Expr::Index { target, index } => {
                let target = f(target);
                let index = f(index);
                Expr::Index { target, index }
            }
            Expr::Call { func, args } => {
                let func = f(func);
                let args = args.into_iter().map(&mut f).collect();
                Expr::Call { func, args }
            }
            Expr::Unary { op, operand } => Expr::Unary {
                op,
                operand: f(operand),
            },
            Expr::Binary { lhs, op, rhs } => {
                let lhs = f(lhs);
                let rhs = f(rhs);
                Expr::Binary { lhs, op, rhs }
            }
            Expr::Paren(inner) => Expr::Paren(f(inner)),
            Expr::Literal(lit) => Expr::Literal(lit),
        }
    }

    /// Borrowing variant of [`Expr::fmap`].
    ///
    /// Operator tags and literal payloads are cloned into the new layer.
    pub fn map_ref<R>(&self, mut f: impl FnMut(&T) -> R) -> Expr<R> {
        match self {
            Expr::Index { target, index } => {
                let target = f(target);
                let index = f(index);
                Expr::Index { target, index }
            }
            Expr::Call { func, args } => {
                let func = f(func);
                let args = args.iter().map(&mut f).collect();
                Expr::Call { func, args }
            }
            Expr::Unary { op, operand } => Expr::Unary {
                op: op.clone(),
                operand: f(operand),
            },
            Expr::Binary { lhs, op, rhs } => {
                let lhs = f(lhs);
                let rhs = f(rhs);
                Expr::Binary {
                    lhs,
                    op: op.clone(),
                    rhs,
                }
            }
            Expr::Paren(inner) => Expr::Paren(f(inner)),
            Expr::Literal(lit) => Expr::Literal(lit.clone()),
        }
    }

    /// Direct children in definition order.
    ///
    /// - `Index`: `[target, index]`
    /// - `Call`: `[func, arg0, arg1, ...]`
    /// - `Unary`: `[operand]`
    /// - `Binary`: `[lhs, rhs]`
    /// - `Paren`: `[inner]`
    /// - `Literal`: `[]`
    pub fn children(&self) -> Children<'_, T> {
        let none = Default::default();
        match self {
            Expr::Index { target, index } => Children::new(Some(target), Some(index), none),
            Expr::Call { func, args } => Children::new(Some(func), None, args),
            Expr::Unary { operand, .. } => Children::new(Some(operand), None, none),
            Expr::Binary { lhs, rhs, .. } => Children::new(Some(lhs), Some(rhs), none),
            Expr::Paren(inner) => Children::new(Some(inner), None, none),
            Expr::Literal(_) => Children::new(None, None, none),
        }
    }

    pub fn child_count(&self) -> usize {
        self.children().len()
    }

    pub fn tag(&self) -> ExprTag {
        match self {
            Expr::Index { .. } => ExprTag::Index,
            Expr::Call { .. } => ExprTag::Call,
            Expr::Unary { .. } => ExprTag::Unary,
            Expr::Binary { .. } => ExprTag::Binary,
            Expr::Paren(_) => ExprTag::Paren,
            Expr::Literal(_) => ExprTag::Literal,
        }
    }

    /// Operator tag of a `Unary` or `Binary` node.
    pub fn op(&self) -> Option<&str> {
        match self {
            Expr::Unary { op, .. } | Expr::Binary { op, .. } => Some(op.as_str()),
            Expr::Index { .. } | Expr::Call { .. } | Expr::Paren(_) | Expr::Literal(_) => None,
        }
    }

    pub fn lit(&self) -> Option<&Lit> {
        match self {
            Expr::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn is_paren(&self) -> bool {
        matches!(self, Expr::Paren(_))
    }
}

/// Iterator over the direct children of an [`Expr`].
///
/// Created by [`Expr::children`].
#[derive(Debug, Clone)]
pub struct Children<'a, T> {
    first: Option<&'a T>,
    second: Option<&'a T>,
    rest: core::slice::Iter<'a, T>,
}

impl<'a, T> Children<'a, T> {
    fn new(first: Option<&'a T>, second: Option<&'a T>, rest: &'a [T]) -> Self {
        Self {
            first,
            second,
            rest: rest.iter(),
        }
    }
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.first
            .take()
            .or_else(|| self.second.take())
            .or_else(|| self.rest.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.first.is_some())
            + usize::from(self.second.is_some())
            + self.rest.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Children<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.rest
            .next_back()
            .or_else(|| self.second.take())
            .or_else(|| self.first.take())
    }
}

impl<T> ExactSizeIterator for Children<'_, T> {}

//! Tree construction macro.
//!
//! # Example
//!
//! ```
//! use exprfold_core::{Tree, expr};
//!
//! // f(xs[0], -(a + "b"))
//! let tree = expr!(call (ident f)
//!     (index (ident xs) (int 0))
//!     (unary "-" (paren (binary (ident a) "+" (str "b")))));
//!
//! let expected = Tree::call(
//!     Tree::ident("f"),
//!     [
//!         Tree::index(Tree::ident("xs"), Tree::int(0)),
//!         Tree::unary("-", Tree::paren(Tree::binary(Tree::ident("a"), "+", Tree::str("b")))),
//!     ],
//! );
//! assert_eq!(tree, expected);
//! ```

/// Build a [`Tree`](crate::Tree) from S-expression notation.
///
/// # Syntax
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `(int 1)` | Integer literal |
/// | `(str "s")` | String literal, kept raw |
/// | `(ident f)` | Identifier |
/// | `(paren X)` | Parenthesized `X` |
/// | `(unary "-" X)` | Prefix operator |
/// | `(binary X "+" Y)` | Infix operator |
/// | `(index X Y)` | `X[Y]` |
/// | `(call F A B ...)` | `F(A, B, ...)`, any number of arguments |
/// | `{ tree }` | Splice an existing `Tree` value |
///
/// The outermost parentheses may be left out.
#[macro_export]
macro_rules! expr {
    // === Leaves ===

    (@node (int $value:expr)) => {
        $crate::Tree::int($value)
    };
    (@node (str $text:expr)) => {
        $crate::Tree::str($text)
    };
    (@node (ident $name:ident)) => {
        $crate::Tree::ident(stringify!($name))
    };

    // === Nodes with children ===

    (@node (paren $inner:tt)) => {
        $crate::Tree::paren($crate::expr!(@node $inner))
    };
    (@node (unary $op:literal $operand:tt)) => {
        $crate::Tree::unary($op, $crate::expr!(@node $operand))
    };
    (@node (binary $lhs:tt $op:literal $rhs:tt)) => {{
        let lhs = $crate::expr!(@node $lhs);
        let rhs = $crate::expr!(@node $rhs);
        $crate::Tree::binary(lhs, $op, rhs)
    }};
    (@node (index $target:tt $index:tt)) => {{
        let target = $crate::expr!(@node $target);
        let index = $crate::expr!(@node $index);
        $crate::Tree::index(target, index)
    }};
    (@node (call $func:tt $($arg:tt)*)) => {{
        let func = $crate::expr!(@node $func);
        $crate::Tree::call(func, [$($crate::expr!(@node $arg)),*])
    }};

    // === Splicing ===

    (@node {$($tree:tt)*}) => {{
        let tree: $crate::Tree = { $($tree)* };
        tree
    }};

    // === Entry points ===

    (($($body:tt)+)) => {
        $crate::expr!(@node ($($body)+))
    };
    ({$($tree:tt)*}) => {
        $crate::expr!(@node {$($tree)*})
    };
    ($($body:tt)+) => {
        $crate::expr!(@node ($($body)+))
    };
}

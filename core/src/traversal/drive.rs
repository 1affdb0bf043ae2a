//! Stack-based fold driver.
//!
//! The `Fold` trait provides a visitor pattern that can:
//! - Transform trees (`Output = Tree`)
//! - Collect information (`Output = HashSet<String>`)
//! - Measure or validate trees, aborting through `Error`
//!
//! Unlike [`cata`](super::cata), the driver keeps its work on explicit
//! stacks, so tree depth is bounded by the heap instead of the native stack.

use alloc::{vec, vec::Vec};
use core::convert::Infallible;
use core::marker::PhantomData;

use crate::tree::{Expr, Tree};

/// Control flow for the fold traversal.
///
/// - `Recurse`: Process children, then call `combine`
/// - `Done(out)`: Skip children, push `out` to results stack
/// - `Replace(tree)`: Visit `tree` instead (push to task stack)
pub enum FoldStep<Output> {
    /// Continue into children, then combine results.
    Recurse,
    /// Finished with this node, prune children (push to results stack).
    Done(Output),
    /// Replace this node with another and continue traversal (push to task stack).
    Replace(Tree),
}

/// A fold (catamorphism) over trees, driven by [`drive_fold`].
///
/// The `Output` type determines what kind of fold this is:
/// - `Tree` for rewrites
/// - `()` for side-effect-only traversals
/// - Any other type for computing values
pub trait Fold {
    type Output;
    type Error;

    /// Called before processing a node's children.
    ///
    /// Return:
    /// - `FoldStep::Recurse` to process children and call `combine`
    /// - `FoldStep::Done(out)` to skip children and use `out` as result
    /// - `FoldStep::Replace(tree)` to visit `tree` instead
    fn visit(&mut self, tree: &Tree) -> Result<FoldStep<Self::Output>, Self::Error>;

    /// Called after all children have been processed.
    ///
    /// `layer` is the node's own layer with every child replaced by its
    /// folded result, in the order given by [`Expr::children`].
    fn combine(
        &mut self,
        tree: &Tree,
        layer: Expr<Self::Output>,
    ) -> Result<Self::Output, Self::Error>;
}

impl<F: Fold + ?Sized> Fold for &mut F {
    type Output = F::Output;
    type Error = F::Error;

    fn visit(&mut self, tree: &Tree) -> Result<FoldStep<Self::Output>, Self::Error> {
        (**self).visit(tree)
    }

    fn combine(
        &mut self,
        tree: &Tree,
        layer: Expr<Self::Output>,
    ) -> Result<Self::Output, Self::Error> {
        (**self).combine(tree, layer)
    }
}

enum Task {
    Visit(Tree),
    Combine(Tree),
}

/// Drive a fold over a tree using stack-based iteration.
///
/// This avoids stack overflow for deeply nested trees. The order of
/// `visit` calls is pre-order and the order of `combine` calls is
/// post-order, both following [`Expr::children`].
pub fn drive_fold<F>(root: &Tree, mut folder: F) -> Result<F::Output, F::Error>
where
    F: Fold,
{
    let mut stack = vec![Task::Visit(root.clone())];
    let mut results: Vec<F::Output> = Vec::new();

    while let Some(task) = stack.pop() {
        match task {
            Task::Visit(tree) => match folder.visit(&tree)? {
                FoldStep::Done(out) => {
                    tracing::trace!(tag = ?tree.kind().tag(), "Fold step pruned children");
                    results.push(out);
                }
                FoldStep::Replace(next) => {
                    tracing::trace!(tag = ?next.kind().tag(), "Fold step replaced node");
                    stack.push(Task::Visit(next));
                }
                FoldStep::Recurse => {
                    let children = tree.kind().children();
                    stack.push(Task::Combine(tree.clone()));
                    stack.extend(children.rev().map(|child| Task::Visit(child.clone())));
                }
            },
            Task::Combine(tree) => {
                let count = tree.kind().child_count();
                let start = results
                    .len()
                    .checked_sub(count)
                    .expect("Bug: result stack underflow");
                let mut children = results.drain(start..);
                let layer = tree.kind().map_ref(|_| {
                    children
                        .next()
                        .expect("Bug: fewer results than children")
                });
                drop(children);
                let out = folder.combine(&tree, layer)?;
                results.push(out);
            }
        }
    }

    debug_assert_eq!(results.len(), 1, "Algorithm bug: expected exactly one result");
    Ok(results.pop().expect("empty result stack"))
}

struct Algebra<R, F> {
    algebra: F,
    _marker: PhantomData<fn() -> R>,
}

impl<R, F> Fold for Algebra<R, F>
where
    F: FnMut(Expr<R>) -> R,
{
    type Output = R;
    type Error = Infallible;

    fn visit(&mut self, _tree: &Tree) -> Result<FoldStep<R>, Infallible> {
        Ok(FoldStep::Recurse)
    }

    fn combine(&mut self, _tree: &Tree, layer: Expr<R>) -> Result<R, Infallible> {
        Ok((self.algebra)(layer))
    }
}

/// [`cata`](super::cata) on explicit stacks.
///
/// Calls `algebra` in exactly the same order as `cata` and returns the same
/// result, without recursing on the native stack.
pub fn drive_cata<R>(root: &Tree, algebra: impl FnMut(Expr<R>) -> R) -> R {
    let folder = Algebra {
        algebra,
        _marker: PhantomData,
    };
    match drive_fold(root, folder) {
        Ok(out) => out,
        Err(never) => match never {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo;
    use crate::traversal::cata;
    use crate::tree::{ExprTag, Lit};
    use alloc::string::String;
    use hashbrown::HashSet;
    use pretty_assertions::assert_eq;

    fn sample() -> Tree {
        // f((a[0]), -(1 + b))
        Tree::call(
            Tree::ident("f"),
            [
                Tree::paren(Tree::index(Tree::ident("a"), Tree::int(0))),
                Tree::unary(
                    "-",
                    Tree::paren(Tree::binary(Tree::int(1), "+", Tree::ident("b"))),
                ),
            ],
        )
    }

    // ========================================================================
    // Visit counting
    // ========================================================================

    struct CountingFolder {
        visit_count: usize,
    }

    impl Fold for CountingFolder {
        type Output = ();
        type Error = ();

        fn visit(&mut self, _tree: &Tree) -> Result<FoldStep<()>, ()> {
            self.visit_count += 1;
            Ok(FoldStep::Recurse)
        }

        fn combine(&mut self, _tree: &Tree, _layer: Expr<()>) -> Result<(), ()> {
            Ok(())
        }
    }

    #[test]
    fn test_visit_counts_all_nodes() {
        let tree = sample();
        let mut folder = CountingFolder { visit_count: 0 };
        drive_fold(&tree, &mut folder).unwrap();
        assert_eq!(folder.visit_count, algo::count(&tree));
    }

    // ========================================================================
    // Done early exit - skip traversal when not needed
    // ========================================================================

    struct IdentCollector;

    impl Fold for IdentCollector {
        type Output = HashSet<String>;
        type Error = ();

        fn visit(&mut self, tree: &Tree) -> Result<FoldStep<Self::Output>, ()> {
            match tree.kind() {
                // Index positions never introduce names worth reporting.
                Expr::Index { .. } => Ok(FoldStep::Done(HashSet::new())),
                _ => Ok(FoldStep::Recurse),
            }
        }

        fn combine(
            &mut self,
            _tree: &Tree,
            layer: Expr<Self::Output>,
        ) -> Result<Self::Output, ()> {
            let mut names = HashSet::new();
            if let Expr::Literal(Lit::Ident(name)) = &layer {
                names.insert(String::from(name.as_str()));
            }
            for child in layer.children() {
                names.extend(child.iter().cloned());
            }
            Ok(names)
        }
    }

    #[test]
    fn test_done_prunes_subtree() {
        let names = drive_fold(&sample(), IdentCollector).unwrap();
        let expected: HashSet<String> = ["f", "b"].into_iter().map(String::from).collect();
        assert_eq!(names, expected);
    }

    // ========================================================================
    // Replace - continue into the replacement
    // ========================================================================

    struct Desugar;

    impl Fold for Desugar {
        type Output = Tree;
        type Error = ();

        fn visit(&mut self, tree: &Tree) -> Result<FoldStep<Tree>, ()> {
            match tree.kind() {
                // -x  =>  0 - x
                Expr::Unary { op, operand } if op.as_str() == "-" => Ok(FoldStep::Replace(
                    Tree::binary(Tree::int(0), "-", operand.clone()),
                )),
                _ => Ok(FoldStep::Recurse),
            }
        }

        fn combine(&mut self, _tree: &Tree, layer: Expr<Tree>) -> Result<Tree, ()> {
            Ok(Tree::new(layer))
        }
    }

    #[test]
    fn test_replace_is_visited() {
        let tree = Tree::unary("-", Tree::unary("-", Tree::ident("x")));
        let result = drive_fold(&tree, Desugar).unwrap();
        let expected = Tree::binary(
            Tree::int(0),
            "-",
            Tree::binary(Tree::int(0), "-", Tree::ident("x")),
        );
        assert_eq!(result, expected);
    }

    // ========================================================================
    // Errors abort the traversal
    // ========================================================================

    struct RejectCalls {
        combined: usize,
    }

    impl Fold for RejectCalls {
        type Output = ();
        type Error = ExprTag;

        fn visit(&mut self, tree: &Tree) -> Result<FoldStep<()>, ExprTag> {
            match tree.kind().tag() {
                ExprTag::Call => Err(ExprTag::Call),
                _ => Ok(FoldStep::Recurse),
            }
        }

        fn combine(&mut self, _tree: &Tree, _layer: Expr<()>) -> Result<(), ExprTag> {
            self.combined += 1;
            Ok(())
        }
    }

    #[test]
    fn test_error_stops_traversal() {
        // a[f(x)]: the call is found after `a` was combined.
        let tree = Tree::index(Tree::ident("a"), Tree::call(Tree::ident("f"), [Tree::ident("x")]));
        let mut folder = RejectCalls { combined: 0 };
        assert_eq!(drive_fold(&tree, &mut folder), Err(ExprTag::Call));
        assert_eq!(folder.combined, 1);
    }

    // ========================================================================
    // drive_cata agrees with cata
    // ========================================================================

    #[test]
    fn test_drive_cata_matches_cata() {
        let tree = sample();
        assert_eq!(drive_cata(&tree, algo::count_node), cata(&tree, algo::count_node));

        let mut recursive = alloc::vec::Vec::new();
        let mut stacked = alloc::vec::Vec::new();
        cata(&tree, |layer: Expr<()>| recursive.push(layer.tag()));
        drive_cata(&tree, |layer: Expr<()>| stacked.push(layer.tag()));
        assert_eq!(stacked, recursive);
    }

    #[test]
    fn test_drive_cata_rebuilds_tree() {
        let tree = sample();
        assert_eq!(drive_cata(&tree, Tree::new), tree);
    }

    #[test]
    fn test_drive_cata_handles_deep_trees() {
        let mut tree = Tree::int(1);
        for _ in 0..2_000 {
            tree = Tree::paren(tree);
        }
        assert_eq!(drive_cata(&tree, algo::count_node), 2_001);
    }
}

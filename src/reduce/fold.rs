use tracing::trace;

use crate::operator::OperatorDefinition;
use crate::reduce::reducer::{DEFAULT_MAX_DEPTH, reduce_at};
use crate::term::Term;

/// Reduce every operand, then fold them left to right with the operator's `combine` rule.
///
/// The result is not reordered; that is the reducer's job.
pub fn fold(def: &OperatorDefinition, operands: &[Term]) -> Term {
    fold_with(def, operands, |operand| reduce_at(operand, DEFAULT_MAX_DEPTH))
}

/// Fold skeleton shared by every operator. `reduce_child` is applied to each operand before
/// combining.
///
/// # Panics
///
/// If the operand count violates the operator's arity. Well-formed terms never do; the
/// construction facility rejects them.
pub(crate) fn fold_with<F>(def: &OperatorDefinition, operands: &[Term], mut reduce_child: F) -> Term
where
    F: FnMut(&Term) -> Term,
{
    assert!(
        def.arity_ok(operands.len()),
        "malformed {} composite with {} operand(s)",
        def.kind,
        operands.len()
    );

    let mut reduced = operands.iter().map(&mut reduce_child);
    let Some(first) = reduced.next() else {
        unreachable!("every operator requires at least one operand");
    };

    let mut acc = first;
    let mut folded_any = false;
    for operand in reduced {
        acc = def.combine(acc, operand);
        folded_any = true;
        trace!(op = %def.kind, acc = %acc, "combined");
    }

    if folded_any { acc } else { def.unary(acc) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::OperatorKind;
    use crate::term::{negate, plus};

    fn identity_fold(kind: OperatorKind, operands: &[Term]) -> Term {
        fold_with(kind.definition(), operands, Term::clone)
    }

    #[test]
    fn folds_left_to_right() {
        let ops = [Term::var("x"), Term::var("y"), Term::number(2.0), Term::number(3.0)];
        let expected = plus(
            plus(plus(Term::var("x"), Term::var("y")), Term::number(2.0)),
            Term::number(3.0),
        );
        assert_eq!(identity_fold(OperatorKind::Plus, &ops), expected);
    }

    #[test]
    fn trailing_identity_is_dropped() {
        let ops = [Term::var("x"), Term::var("y"), Term::number(0.0)];
        assert_eq!(
            identity_fold(OperatorKind::Plus, &ops),
            plus(Term::var("x"), Term::var("y"))
        );
    }

    #[test]
    fn unary_operands_follow_the_unary_rule() {
        assert_eq!(identity_fold(OperatorKind::Plus, &[Term::var("x")]), Term::var("x"));
        assert_eq!(identity_fold(OperatorKind::Minus, &[Term::number(7.0)]), Term::number(-7.0));
        assert_eq!(
            identity_fold(OperatorKind::Minus, &[Term::var("x")]),
            negate(Term::var("x"))
        );
    }

    #[test]
    fn children_are_reduced_first() {
        let ops = [plus(Term::number(1.0), Term::number(2.0)), Term::number(4.0)];
        let def = OperatorKind::Times.definition();
        assert_eq!(fold(def, &ops), Term::number(12.0));
    }

    #[test]
    #[should_panic(expected = "malformed")]
    fn rejects_bad_arity() {
        let ops = [Term::number(1.0), Term::number(2.0), Term::number(3.0)];
        identity_fold(OperatorKind::Minus, &ops);
    }
}

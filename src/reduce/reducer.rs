use tracing::{debug, warn};

use crate::reduce::canonical::{rebucket, reorder};
use crate::reduce::fold::fold_with;
use crate::term::Term;

/// Composites nested deeper than this are returned unreduced.
pub const DEFAULT_MAX_DEPTH: usize = 512;
pub const DEFAULT_MAX_ITERS: usize = 64;

/// Reduce `term` with clear-box arithmetic identities only.
///
/// Examples: the reduct of `(+ 2 2)` is `4`; the reduct of `(+ x 0)` is `x`, because adding
/// zero to anything yields the thing itself. Leaves are already in normal form.
///
/// A single pass: children are reduced once, then this level is folded and put back into
/// canonical order. See [`reduce_fully`] for iterating to a fixpoint.
pub fn reduce(term: &Term) -> Term {
    reduce_with_limit(term, DEFAULT_MAX_DEPTH)
}

/// Like [`reduce`], leaving composites nested more than `max_depth` levels down untouched.
pub fn reduce_with_limit(term: &Term, max_depth: usize) -> Term {
    debug!(term = %term, max_depth, "reduce");
    reduce_at(term, max_depth)
}

/// Apply [`reduce`] until the term stops changing or [`DEFAULT_MAX_ITERS`] passes have run.
pub fn reduce_fully(term: &Term) -> Term {
    reduce_with_iterations(term, DEFAULT_MAX_ITERS)
}

/// Apply [`reduce`] up to `max_iters` times, returning the last value if no fixpoint is reached.
pub fn reduce_with_iterations(term: &Term, max_iters: usize) -> Term {
    let mut current = term.clone();
    for _ in 0..max_iters {
        let next = reduce(&current);
        if next == current {
            return current;
        }
        current = next;
    }
    current
}

pub(crate) fn reduce_at(term: &Term, budget: usize) -> Term {
    if !matches!(term, Term::Composite(_)) {
        return term.clone();
    }
    if budget == 0 {
        warn!(term = %term, "depth limit reached, leaving subterm unreduced");
        return term.clone();
    }

    let canon = reorder(term);
    let Term::Composite(c) = &canon else {
        unreachable!("reorder keeps composites composite");
    };
    let def = c.op().definition();
    // Only reachable through the unchecked builders, e.g. (+ {} {}): an empty fold.
    if c.operands().is_empty() {
        return def.identity().unwrap_or_else(|| term.clone());
    }
    let folded = fold_with(def, c.operands(), |operand| {
        reduce_at(operand, budget - 1)
    });

    match folded {
        Term::Composite(_) => rebucket(&folded),
        leaf => leaf,
    }
}

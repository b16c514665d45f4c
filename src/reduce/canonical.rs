use crate::term::Term;

#[derive(Default)]
struct Buckets {
    vars: Vec<Term>,
    exprs: Vec<Term>,
    numbers: Vec<Term>,
}

impl Buckets {
    fn push(&mut self, term: &Term) {
        match term {
            Term::Variable(_) => self.vars.push(term.clone()),
            Term::Number(_) => self.numbers.push(term.clone()),
            _ => self.exprs.push(term.clone()),
        }
    }

    fn into_operands(self) -> Vec<Term> {
        let mut out = self.vars;
        out.extend(self.exprs);
        out.extend(self.numbers);
        out
    }
}

/// Put the operands of a commutative composite into canonical order: variables, then other
/// expressions, then numbers, each group keeping its relative order. Anything else is
/// returned as is.
pub fn reorder(term: &Term) -> Term {
    reorder_impl(term, true)
}

/// Canonical order for a freshly folded node. Wrappers still present at this point were
/// nested inside another wrapper and stay opaque.
pub(crate) fn rebucket(term: &Term) -> Term {
    reorder_impl(term, false)
}

fn reorder_impl(term: &Term, flatten_wrappers: bool) -> Term {
    let Term::Composite(c) = term else {
        return term.clone();
    };
    if !c.op().is_commutative() {
        return term.clone();
    }

    let mut buckets = Buckets::default();
    for operand in c.operands() {
        match operand {
            Term::Wrapper(items) if flatten_wrappers => flatten_wrapper(items, &mut buckets),
            other => buckets.push(other),
        }
    }
    Term::from_parts(c.op(), buckets.into_operands())
}

/// Wrappers come from an external substitution step; their items join the enclosing
/// operator's buckets. Exactly one level: a wrapper inside a wrapper is an ordinary expression.
fn flatten_wrapper(items: &[Term], buckets: &mut Buckets) {
    for item in items {
        buckets.push(item);
    }
}

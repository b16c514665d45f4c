//! Expression tree definitions and helpers.

use std::fmt;
use std::sync::Arc;

use crate::error::{ReductError, Result};
use crate::operator::OperatorKind;

/// Opaque identifier of an unbound variable. Two symbols are equal iff their names are.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn new(name: impl AsRef<str>) -> Self {
        Symbol(Arc::from(name.as_ref()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An operator applied to an ordered operand sequence.
///
/// Operands sit behind an `Arc` so sub-terms are shared between the input tree and every tree
/// derived from it.
#[derive(Clone, PartialEq, Debug)]
pub struct Composite {
    op: OperatorKind,
    operands: Arc<[Term]>,
}

impl Composite {
    pub fn op(&self) -> OperatorKind {
        self.op
    }

    pub fn operands(&self) -> &[Term] {
        &self.operands
    }
}

#[derive(Clone, Debug)]
pub enum Term {
    Number(f64),
    Variable(Symbol),
    Composite(Composite),
    /// Unordered bag handed over by an external substitution step. Only ever flattened one
    /// level, by the canonicalizer.
    Wrapper(Arc<[Term]>),
}

impl Term {
    pub fn number(value: f64) -> Self {
        Term::Number(value)
    }

    pub fn var(name: impl AsRef<str>) -> Self {
        Term::Variable(Symbol::new(name))
    }

    pub fn wrapper(items: impl IntoIterator<Item = Term>) -> Self {
        Term::Wrapper(items.into_iter().collect())
    }

    /// Build a composite, rejecting operand counts the operator does not accept.
    ///
    /// Commutative operators absorb wrapper items into their own operand list, so those items
    /// are what gets counted.
    pub fn composite(op: OperatorKind, operands: impl IntoIterator<Item = Term>) -> Result<Self> {
        let operands: Arc<[Term]> = operands.into_iter().collect();
        check_arity(op, &operands)?;
        Ok(Term::from_parts(op, operands))
    }

    /// Unchecked constructor for the builders and the reduction passes.
    pub(crate) fn from_parts(op: OperatorKind, operands: impl Into<Arc<[Term]>>) -> Self {
        Term::Composite(Composite {
            op,
            operands: operands.into(),
        })
    }

    pub fn operator_kind(&self) -> Option<OperatorKind> {
        match self {
            Term::Composite(c) => Some(c.op),
            _ => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Term::Number(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        if let Term::Number(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    pub fn as_variable(&self) -> Option<&str> {
        if let Term::Variable(symbol) = self {
            Some(symbol.name())
        } else {
            None
        }
    }

    /// Direct children of a composite or wrapper; empty for leaves.
    pub fn operands(&self) -> &[Term] {
        match self {
            Term::Composite(c) => &c.operands,
            Term::Wrapper(items) => items,
            Term::Number(_) | Term::Variable(_) => &[],
        }
    }

    pub fn size(&self) -> usize {
        1 + self.operands().iter().map(Term::size).sum::<usize>()
    }

    pub fn depth(&self) -> usize {
        1 + self.operands().iter().map(Term::depth).max().unwrap_or(0)
    }
}

/// Structural equality. Numbers compare with `==` except that NaN equals NaN, so every term
/// equals itself; `0.0` and `-0.0` stay equal.
impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Term::Number(a), Term::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Term::Variable(a), Term::Variable(b)) => a == b,
            (Term::Composite(a), Term::Composite(b)) => a == b,
            (Term::Wrapper(a), Term::Wrapper(b)) => a == b,
            _ => false,
        }
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::Number(value)
    }
}

impl From<Symbol> for Term {
    fn from(symbol: Symbol) -> Self {
        Term::Variable(symbol)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::pretty(self))
    }
}

/// Report the first composite in `term` whose operand count its operator rejects.
pub fn validate(term: &Term) -> Result<()> {
    if let Term::Composite(c) = term {
        check_arity(c.op, &c.operands)?;
    }
    term.operands().iter().try_for_each(validate)
}

fn check_arity(op: OperatorKind, operands: &[Term]) -> Result<()> {
    let got = if op.is_commutative() {
        operands
            .iter()
            .map(|operand| match operand {
                Term::Wrapper(items) => items.len(),
                _ => 1,
            })
            .sum()
    } else {
        operands.len()
    };
    if op.definition().arity_ok(got) {
        Ok(())
    } else {
        Err(ReductError::Arity { op, got })
    }
}

pub fn plus(a: Term, b: Term) -> Term {
    Term::from_parts(OperatorKind::Plus, [a, b])
}

pub fn minus(a: Term, b: Term) -> Term {
    Term::from_parts(OperatorKind::Minus, [a, b])
}

pub fn negate(a: Term) -> Term {
    Term::from_parts(OperatorKind::Minus, [a])
}

pub fn times(a: Term, b: Term) -> Term {
    Term::from_parts(OperatorKind::Times, [a, b])
}

pub fn divide(a: Term, b: Term) -> Term {
    Term::from_parts(OperatorKind::Divide, [a, b])
}

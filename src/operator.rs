//! Per-operator reduction policy.
//!
//! Every arithmetic operator is described by an [`OperatorDefinition`] record looked up from a
//! static table. The fold engine only ever talks to the record, so adding an operator means
//! adding a variant to [`OperatorKind`] and a row to the table.

use std::fmt;
use std::str::FromStr;

use crate::error::ReductError;
use crate::term::Term;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum OperatorKind {
    Plus,
    Minus,
    Times,
    Divide,
}

impl OperatorKind {
    pub const ALL: [OperatorKind; 4] = [
        OperatorKind::Plus,
        OperatorKind::Minus,
        OperatorKind::Times,
        OperatorKind::Divide,
    ];

    pub fn definition(self) -> &'static OperatorDefinition {
        &DEFINITIONS[self as usize]
    }

    pub fn is_commutative(self) -> bool {
        self.definition().commutative
    }

    pub fn symbol(self) -> &'static str {
        match self {
            OperatorKind::Plus => "+",
            OperatorKind::Minus => "-",
            OperatorKind::Times => "*",
            OperatorKind::Divide => "/",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for OperatorKind {
    type Err = ReductError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" | "Plus" => Ok(OperatorKind::Plus),
            "-" | "Minus" => Ok(OperatorKind::Minus),
            "*" | "Times" => Ok(OperatorKind::Times),
            "/" | "Divide" => Ok(OperatorKind::Divide),
            other => Err(ReductError::Unsupported(format!("unknown operator `{other}`"))),
        }
    }
}

/// What a composite with a single operand folds to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnaryRule {
    /// The sole operand stands for the whole node.
    PassThrough,
    /// `-v` for a number; otherwise the unary node is kept.
    Negate,
    /// `1/v` for a non-zero number; otherwise the unary node is kept.
    Reciprocal,
}

#[derive(Clone, Copy, Debug)]
pub struct OperatorDefinition {
    pub kind: OperatorKind,
    pub commutative: bool,
    /// Right-hand identity element, if any.
    pub identity: Option<f64>,
    pub min_arity: usize,
    pub max_arity: Option<usize>,
    /// Numeric rule for two constants. `None` means "cannot be computed safely", and the pair
    /// stays symbolic.
    pub numeric: fn(f64, f64) -> Option<f64>,
    pub unary: UnaryRule,
}

fn add(a: f64, b: f64) -> Option<f64> {
    Some(a + b)
}

fn sub(a: f64, b: f64) -> Option<f64> {
    Some(a - b)
}

fn mul(a: f64, b: f64) -> Option<f64> {
    Some(a * b)
}

fn div(a: f64, b: f64) -> Option<f64> {
    if b == 0.0 { None } else { Some(a / b) }
}

static DEFINITIONS: [OperatorDefinition; 4] = [
    OperatorDefinition {
        kind: OperatorKind::Plus,
        commutative: true,
        identity: Some(0.0),
        min_arity: 1,
        max_arity: None,
        numeric: add,
        unary: UnaryRule::PassThrough,
    },
    OperatorDefinition {
        kind: OperatorKind::Minus,
        commutative: false,
        identity: Some(0.0),
        min_arity: 1,
        max_arity: Some(2),
        numeric: sub,
        unary: UnaryRule::Negate,
    },
    OperatorDefinition {
        kind: OperatorKind::Times,
        commutative: true,
        identity: Some(1.0),
        min_arity: 1,
        max_arity: None,
        numeric: mul,
        unary: UnaryRule::PassThrough,
    },
    OperatorDefinition {
        kind: OperatorKind::Divide,
        commutative: false,
        identity: Some(1.0),
        min_arity: 1,
        max_arity: Some(2),
        numeric: div,
        unary: UnaryRule::Reciprocal,
    },
];

impl OperatorDefinition {
    pub fn arity_ok(&self, n: usize) -> bool {
        n >= self.min_arity && self.max_arity.is_none_or(|max| n <= max)
    }

    pub fn identity(&self) -> Option<Term> {
        self.identity.map(Term::Number)
    }

    /// Pairwise reduction step applied left to right across already reduced operands.
    ///
    /// Only `b` is compared against the identity; commutative operators rely on canonical
    /// order putting numbers last so a neutral constant always lands on the right.
    pub fn combine(&self, a: Term, b: Term) -> Term {
        if let (Term::Number(x), Term::Number(y)) = (&a, &b) {
            if let Some(value) = (self.numeric)(*x, *y) {
                return Term::Number(value);
            }
        }
        if matches!((&b, self.identity), (Term::Number(v), Some(id)) if *v == id) {
            return a;
        }
        Term::from_parts(self.kind, [a, b])
    }

    /// Fold a node that has exactly one (already reduced) operand.
    pub fn unary(&self, operand: Term) -> Term {
        match (self.unary, operand) {
            (UnaryRule::PassThrough, operand) => operand,
            (UnaryRule::Negate, Term::Number(v)) => Term::Number(-v),
            (UnaryRule::Reciprocal, Term::Number(v)) if v != 0.0 => Term::Number(1.0 / v),
            (_, operand) => Term::from_parts(self.kind, [operand]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_match_their_kind() {
        for kind in OperatorKind::ALL {
            assert_eq!(kind.definition().kind, kind);
        }
    }

    #[test]
    fn minus_arity_is_one_or_two() {
        let def = OperatorKind::Minus.definition();
        assert!(!def.arity_ok(0));
        assert!(def.arity_ok(1));
        assert!(def.arity_ok(2));
        assert!(!def.arity_ok(3));
        assert!(OperatorKind::Plus.definition().arity_ok(7));
    }

    #[test]
    fn identity_is_only_checked_on_the_right() {
        let def = OperatorKind::Plus.definition();
        let x = Term::var("x");
        assert_eq!(def.combine(x.clone(), Term::number(0.0)), x);
        assert_eq!(
            def.combine(Term::number(0.0), x.clone()),
            Term::from_parts(OperatorKind::Plus, [Term::number(0.0), x])
        );
    }

    #[test]
    fn division_by_zero_stays_symbolic() {
        let def = OperatorKind::Divide.definition();
        assert_eq!(
            def.combine(Term::number(1.0), Term::number(0.0)),
            Term::from_parts(OperatorKind::Divide, [Term::number(1.0), Term::number(0.0)])
        );
        assert_eq!(def.unary(Term::number(0.0)).operator_kind(), Some(OperatorKind::Divide));
        assert_eq!(def.unary(Term::number(4.0)), Term::number(0.25));
    }

    #[test]
    fn operator_names_parse() {
        assert_eq!("Plus".parse::<OperatorKind>(), Ok(OperatorKind::Plus));
        assert_eq!("/".parse::<OperatorKind>(), Ok(OperatorKind::Divide));
        assert!(matches!(
            "^".parse::<OperatorKind>(),
            Err(ReductError::Unsupported(_))
        ));
    }
}

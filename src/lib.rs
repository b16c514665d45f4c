//! Clear-box symbolic reduction of arithmetic expression trees.
//!
//! Terms are reduced using only identities that always hold (constant folding and identity
//! elimination), never by evaluating unknowns:
//!
//! ```
//! use reduct::{parse_term, reduce};
//!
//! let term = parse_term("(+ 0 x y)").unwrap();
//! assert_eq!(reduce(&term).to_string(), "(+ x y)");
//! ```

pub mod error;
pub mod format;
pub mod operator;
pub mod parser;
pub mod reduce;
pub mod term;

pub use error::{ReductError, Result};
pub use format::pretty;
pub use operator::{OperatorDefinition, OperatorKind, UnaryRule};
pub use parser::parse_term;
pub use reduce::{fold, reduce, reduce_fully, reduce_with_iterations, reduce_with_limit, reorder};
pub use term::{Composite, Symbol, Term, divide, minus, negate, plus, times, validate};

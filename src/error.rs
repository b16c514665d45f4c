use thiserror::Error;

use crate::operator::OperatorKind;

pub type Result<T> = std::result::Result<T, ReductError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReductError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{op} does not accept {got} operand(s)")]
    Arity { op: OperatorKind, got: usize },
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}

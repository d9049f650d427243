//! Error types for vector arithmetic.

use std::fmt;

/// Errors raised by fallible vector operations.
///
/// Operand type mismatches never reach runtime: the arithmetic operators
/// are only implemented for vector/vector and vector/scalar pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VectorError {
    /// A scalar operand was NaN or infinite.
    InvalidOperand { operand: f64 },
    /// Division by zero, including normalising a zero-length vector.
    DivideByZero,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::InvalidOperand { operand } => {
                write!(f, "Invalid scalar operand for vector arithmetic: {}", operand)
            }
            VectorError::DivideByZero => write!(f, "Vector division by zero"),
        }
    }
}

impl std::error::Error for VectorError {}

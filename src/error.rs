use thiserror::Error;

use crate::ir::BinOp;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Semantic,
}

/// Everything that aborts a compilation. There is no recovery: the first
/// error ends parsing and nothing after it is produced.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CompileError {
    #[error("Syntax Error: Missing variable name in declaration.")]
    MissingVariableName { found: Option<String> },
    #[error("Syntax Error: Missing '=' after variable declaration.")]
    MissingAssign { found: Option<String> },
    #[error("Syntax Error: Invalid print statement.")]
    InvalidPrint { found: Option<String> },
    #[error("Syntax Error at token: {token}")]
    UnexpectedToken { token: String },
    #[error("Syntax Error: Expected expression but found {}.", .found.as_deref().unwrap_or("end of input"))]
    ExpectedExpression { found: Option<String> },
    #[error("Syntax Error: Missing ')' in expression.")]
    UnclosedParen { found: Option<String> },
    #[error("Syntax Error: Invalid number literal '{text}'.")]
    InvalidNumber { text: String },

    #[error("Semantic Error: Variable '{name}' used before declaration in print.")]
    UndeclaredVariable { name: String },
    #[error("Semantic Error: Division by zero in constant expression '{lhs} / {rhs}'.")]
    DivisionByZero { lhs: i64, rhs: i64 },
    #[error("Semantic Error: Integer overflow in constant expression '{lhs} {op} {rhs}'.")]
    Overflow { op: BinOp, lhs: i64, rhs: i64 },
    #[error("Semantic Error: Negative exponent in constant expression '{lhs} ^ {rhs}'.")]
    NegativeExponent { lhs: i64, rhs: i64 },
}

impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::MissingVariableName { .. }
            | CompileError::MissingAssign { .. }
            | CompileError::InvalidPrint { .. }
            | CompileError::UnexpectedToken { .. }
            | CompileError::ExpectedExpression { .. }
            | CompileError::UnclosedParen { .. }
            | CompileError::InvalidNumber { .. } => ErrorKind::Syntax,
            CompileError::UndeclaredVariable { .. }
            | CompileError::DivisionByZero { .. }
            | CompileError::Overflow { .. }
            | CompileError::NegativeExponent { .. } => ErrorKind::Semantic,
        }
    }

    /// Text of the token the error points at, if there was one.
    pub fn offending_text(&self) -> Option<String> {
        match self {
            CompileError::MissingVariableName { found }
            | CompileError::MissingAssign { found }
            | CompileError::InvalidPrint { found }
            | CompileError::ExpectedExpression { found }
            | CompileError::UnclosedParen { found } => found.clone(),
            CompileError::UnexpectedToken { token } => Some(token.clone()),
            CompileError::InvalidNumber { text } => Some(text.clone()),
            CompileError::UndeclaredVariable { name } => Some(name.clone()),
            CompileError::DivisionByZero { lhs, rhs } => Some(format!("{lhs} / {rhs}")),
            CompileError::NegativeExponent { lhs, rhs } => Some(format!("{lhs} ^ {rhs}")),
            CompileError::Overflow { op, lhs, rhs } => Some(format!("{lhs} {op} {rhs}")),
        }
    }
}

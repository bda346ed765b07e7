use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Divisor {divisor} shares a factor with 10, so no repunit is divisible by it")]
    DivisorNotCoprimeWithBase { divisor: u64 },

    #[error("Arithmetic overflow: {0}")]
    ArithmeticOverflow(String),

    #[error("No repunit of length <= {limit} is divisible by {divisor}")]
    SearchLimitExceeded { divisor: u64, limit: usize },
}

pub type Result<T> = std::result::Result<T, MathError>;

//! The module contains the errors the engine can return.
//!
//! The balance computations themselves never fail; errors only come from the
//! edges — parsing money out of user input and the caller-side
//! [`Expense::validate`] checks.
//!
//! [`Expense::validate`]: crate::Expense::validate
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Expense has no participants")]
    EmptyParticipants,
    #[error("Payers do not cover the total: {0}")]
    PayerMismatch(String),
    #[error("Shares exceed the total: {0}")]
    ShareOvercommit(String),
}

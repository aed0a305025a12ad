// Defines the service error type and a result type alias using the thiserror crate.
use axum::extract::rejection::JsonRejection;
use thiserror::Error;

// Make the response module public
pub mod response;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("User already exists.")]
    AlreadyExists,

    #[error("Wrong username or password.")]
    InvalidCredentials,

    #[error("No user has signed in.")]
    NoActiveSession,

    #[error("float division by zero")]
    DivisionByZero,

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("{0}")]
    Generic(String),

    // Body could not be read as the expected JSON payload
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;

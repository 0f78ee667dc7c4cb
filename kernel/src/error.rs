use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    Validation(String),
    NotFound,
    Unauthorized,
    Forbidden,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Validation(message) => write!(f, "{message}"),
            KernelError::NotFound => write!(f, "Entity not found"),
            KernelError::Unauthorized => write!(f, "Authentication required"),
            KernelError::Forbidden => write!(f, "Operation not permitted"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

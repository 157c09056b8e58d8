use thiserror::Error;

/// Custom error type for contract operations.
///
/// Every public operation converts these into a `{success, error}` envelope
/// at the boundary; the message is what the back-office user sees.
#[derive(Debug, Error)]
pub enum ContractError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Referenced {kind} '{id}' does not exist")]
    ItemNotFound { kind: String, id: String },

    #[error("Contract is not balanced: difference of {difference:.2}")]
    Unbalanced { difference: f64 },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<ContractError> for String {
    fn from(error: ContractError) -> Self {
        error.to_string()
    }
}

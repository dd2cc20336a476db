use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccountIdError {
    #[error("Account id error: {0}")]
    InvalidFormat(String),
    #[error("Account id error: {0}")]
    Uuid(#[from] uuid::Error)
}

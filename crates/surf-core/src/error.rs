use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfError {
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),
}

pub type Result<T> = std::result::Result<T, SurfError>;

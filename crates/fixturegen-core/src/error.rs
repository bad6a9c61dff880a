use thiserror::Error;

/// Core error type shared across fixturegen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The nested value shape has unusable bounds.
    #[error("invalid shape: {0}")]
    InvalidShape(String),
}

/// Convenience alias for results returned by fixturegen crates.
pub type Result<T> = std::result::Result<T, Error>;

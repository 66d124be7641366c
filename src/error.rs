use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackdropError {
    #[error("element #{0} not found")]
    MissingElement(&'static str),

    #[error("2d context not available on #{0}")]
    MissingContext(&'static str),

    /// A host canvas or DOM call threw; carries the debug rendering of the JS value.
    #[error("surface call failed: {0}")]
    Surface(String),
}

pub type Result<T> = std::result::Result<T, BackdropError>;

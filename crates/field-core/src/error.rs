use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// The drawing surface has no drawable area (zero, negative or non-finite size).
    #[error("surface {width}x{height} is not drawable")]
    UnusableSurface { width: f64, height: f64 },
    #[error("invalid field parameter: {0}")]
    InvalidParams(&'static str),
}

pub type Result<T, E = FieldError> = std::result::Result<T, E>;

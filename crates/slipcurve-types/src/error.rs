use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlipcurveError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Overlay data error at line {line}: {message}")]
    Overlay { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SlipcurveResult<T> = Result<T, SlipcurveError>;

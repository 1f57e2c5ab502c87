use thiserror::Error;

#[derive(Error, Debug)]
pub enum CowsayError {
    #[error("input text must contain non-whitespace content")]
    EmptyInput,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid module arguments: {0}")]
    Args(#[from] serde_json::Error),
}

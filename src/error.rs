use thiserror::Error;

#[derive(Error, Debug)]
pub enum MakeTitleError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date '{value}'. Expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MakeTitleError>;

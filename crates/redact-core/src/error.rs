use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Document text unavailable: {0}")]
    TextUnavailable(String),

    #[error("Document editor error: {0}")]
    Editor(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

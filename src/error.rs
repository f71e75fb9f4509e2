use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Error: The specified file does not exist.")]
    FileNotFound(PathBuf),

    /// Carries the parser's diagnostic, including line and column.
    #[error("Error parsing JSON: {0}")]
    MalformedInput(String),

    /// Writing the output, or a read failure that is neither of the above.
    #[error("Error: {0}")]
    Io(#[from] std::io::Error),
}

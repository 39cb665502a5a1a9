use thiserror::Error;

pub type Result<T> = std::result::Result<T, GrabError>;

#[derive(Debug, Error)]
pub enum GrabError {
    #[error("Display server error: {0}")]
    DisplayServer(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

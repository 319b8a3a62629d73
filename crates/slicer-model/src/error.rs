use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlicerError {
    #[error("host rejected {object}.{property}: {message}")]
    Host {
        object: String,
        property: String,
        message: String,
    },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, SlicerError>;

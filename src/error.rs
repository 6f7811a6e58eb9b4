use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed page map: {0}")]
    MalformedInput(String),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

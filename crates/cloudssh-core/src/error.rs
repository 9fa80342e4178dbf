use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

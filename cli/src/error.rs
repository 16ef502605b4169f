use thiserror::Error;
use todo_core::ActionError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    InvalidInput(String),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn invalid_input<M: Into<String>>(message: M) -> Self {
        Self::InvalidInput(message.into())
    }
}

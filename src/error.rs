use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AppError {
    /// Transport-level failure (no response, timeout, or unreadable body)
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Http(_) | AppError::Task(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_message() {
        let err = AppError::UnexpectedStatus {
            status: 500,
            url: "http://localhost/api/atualizar_status/".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected status 500 from http://localhost/api/atualizar_status/"
        );
        assert!(!err.is_transport());
    }
}

//! Error types for Todoist API calls

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the Todoist REST API
#[derive(Error, Debug)]
pub enum TodoistError {
    /// The token cannot be sent as an HTTP header
    #[error("Todoist token contains characters that are not valid in an HTTP header")]
    InvalidToken,

    /// The HTTP client could not be constructed
    #[error(transparent)]
    ClientBuild(reqwest::Error),

    /// The API answered with a non-success status
    #[error("{status}: {message}")]
    Api {
        status: StatusCode,
        /// Response body as sent by Todoist
        message: String,
    },

    /// Transport-level failure (DNS, TLS, connection reset, timeout)
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The response body did not match the expected shape
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for Todoist operations
pub type TodoistResult<T> = Result<T, TodoistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let err = TodoistError::Api {
            status: StatusCode::NOT_FOUND,
            message: "Task not found".to_string(),
        };
        assert_eq!(err.to_string(), "404 Not Found: Task not found");
    }

    #[test]
    fn test_parse_error_message_is_unwrapped() {
        let inner = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = inner.to_string();

        let err: TodoistError = inner.into();
        assert_eq!(err.to_string(), expected);
    }
}

//! Error conversion helpers
//!
//! Tool failures are normally reported in-band with an error envelope (see
//! [`crate::result`]). rmcp errors are reserved for faults in the server
//! itself, such as a response that cannot be serialized.

use rmcp::ErrorData as McpError;

/// Conversion of a foreign error into an rmcp error
pub trait IntoMcpError {
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for serde_json::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("JSON error: {}", self), None)
    }
}

/// Adds `to_mcp_err()` to any `Result` whose error implements [`IntoMcpError`]
pub trait ResultExt<T> {
    fn to_mcp_err(self) -> Result<T, McpError>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> Result<T, McpError> {
        self.map_err(|e| e.into_mcp_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_error_conversion() {
        let result: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err = result.to_mcp_err().unwrap_err();
        assert!(err.message.starts_with("JSON error:"));
    }
}

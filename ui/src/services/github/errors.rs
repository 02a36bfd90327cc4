use std::fmt;

/// Errors surfaced by the GraphQL query layer.
#[derive(Debug, Clone)]
pub enum ClientError {
    /// Transport-level failure before a response arrived
    NetworkError { message: String },
    /// Endpoint answered with a non-success HTTP status
    HttpStatus { status: u16 },
    /// Response carried a GraphQL `errors` array
    GraphqlError { message: String },
    /// Response body did not have the shape the query promises
    InvalidResponse { expected: String },
    /// JSON (de)serialization failed
    SerializationError { message: String },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::NetworkError { message } => {
                write!(f, "Network error: {}", message)
            }
            ClientError::HttpStatus { status } => {
                write!(f, "GraphQL endpoint answered HTTP {}", status)
            }
            ClientError::GraphqlError { message } => {
                write!(f, "GraphQL error: {}", message)
            }
            ClientError::InvalidResponse { expected } => {
                write!(f, "Invalid response: missing {}", expected)
            }
            ClientError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::NetworkError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::SerializationError {
            message: err.to_string(),
        }
    }
}

/// Result type for query-layer operations
pub type ClientResult<T> = Result<T, ClientError>;

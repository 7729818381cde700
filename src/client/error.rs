//! Error types for client API calls.

use std::error::Error;
use std::fmt;

/// Error type for [`StudentApi`](super::StudentApi) calls.
#[derive(Debug)]
pub enum ClientError {
    /// The request could not be sent or the connection failed.
    Http(reqwest::Error),
    /// The service answered with a non-success status.
    Status { status: u16, message: String },
    /// The response body was not the expected JSON.
    Decode(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Http(e) => write!(f, "request failed: {}", e),
            ClientError::Status { status, message } => {
                write!(f, "service returned {}: {}", status, message)
            }
            ClientError::Decode(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClientError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Http(err)
        }
    }
}

impl ClientError {
    /// The HTTP status, when the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

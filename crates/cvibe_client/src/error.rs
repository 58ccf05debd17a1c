use thiserror::Error;

/// Normalized failure for every backend call.
///
/// The four expected failure modes (transport error, non-2xx status,
/// backend-reported `success:false`, undecodable body) all collapse into
/// this type at the client boundary. Callers branch on the variant or just
/// render the display message; nothing below this layer panics.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx response whose envelope carried `success: false`.
    #[error("{0}")]
    Backend(String),

    /// The response body could not be decoded into the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Human-readable message, guaranteed non-empty.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status code, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the backend explicitly rejected the credential.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

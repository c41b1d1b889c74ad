use std::fmt;

#[derive(Debug)]
pub enum RoomGenError {
    ConfigError(String),
    ValidationError(String),
    ApiError(String),
    NetworkError(String),
    ResponseError(String),
    SchemaError(String),
    ArchiveError(String),
    BusyError(String),
}

impl fmt::Display for RoomGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomGenError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            RoomGenError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            RoomGenError::ApiError(msg) => write!(f, "API error: {}", msg),
            RoomGenError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            RoomGenError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            RoomGenError::SchemaError(msg) => write!(f, "Schema error: {}", msg),
            RoomGenError::ArchiveError(msg) => write!(f, "Archive error: {}", msg),
            RoomGenError::BusyError(msg) => write!(f, "Busy: {}", msg),
        }
    }
}

impl std::error::Error for RoomGenError {}

impl RoomGenError {
    /// Classify a transport failure into the small user-facing set.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            RoomGenError::NetworkError(format!("Service unreachable: {}", err))
        } else if err.is_decode() {
            RoomGenError::ResponseError(err.to_string())
        } else {
            RoomGenError::ApiError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, RoomGenError>;

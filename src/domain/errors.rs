/// Application-wide error taxonomy shared by all fetch surfaces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The request never completed (fetch rejected, DNS, CORS, offline)
    Network(String),
    /// The server answered with a non-2xx status
    Http { status: u16, message: String },
    /// 401 on a credentialed call, carrying an actionable message
    Unauthorized(String),
    /// Client-side validation failed before any request was issued
    Validation(String),
    /// An abstraction was used outside its initialized lifetime
    Config(String),
}

impl AppError {
    /// Display-ready message stored in fetch error states
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => "Network error occurred".to_string(),
            AppError::Http { message, .. } => message.clone(),
            AppError::Unauthorized(message) => message.clone(),
            AppError::Validation(message) => message.clone(),
            AppError::Config(message) => format!("Configuration error: {message}"),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Unauthorized(_) => Some(401),
            _ => None,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network Error: {}", msg),
            AppError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type ApiResult<T> = Result<T, AppError>;

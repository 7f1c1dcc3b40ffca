//! Error types for the promoadmin console

use thiserror::Error;

/// Result type alias for promoadmin operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not logged in. Run `promoadmin login` first.")]
    NotAuthenticated,

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Session rejected by the server. Run `promoadmin login` again.")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Promotion form errors, raised before anything is sent to the backend
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("Meal {row}: price '{input}' is not a valid number")]
    InvalidPrice { row: usize, input: String },

    #[error("Meal {row}: price must not be negative")]
    NegativePrice { row: usize },

    #[error("Meal {0} does not exist")]
    NoSuchMeal(usize),

    #[error("Invalid meal '{0}'. Expected NAME=PRICE[;DESCRIPTION[;ADDITIONALS]]")]
    InvalidMealSpec(String),

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Another dialog is already open")]
    DialogOpen,
}

use thiserror::Error;

// Enum for handling application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Data service error: {0}")]
    Api(#[from] ApiError), // Errors talking to the data service.

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error), // Errors related to settings serialization.

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error), // Input/output errors.

    #[error("Logger error: {0}")]
    Logger(String), // The file logger could not be installed.
}

// Errors raised at the data-service boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error), // Connection, TLS or body read failures.

    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String), // 404 from the service, e.g. unknown enemy or region.

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error), // Body was not the expected JSON shape.

    #[error("Unexpected response for {0}")]
    UnexpectedResponse(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;
use um_core::CoreError;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response from the API
    #[error("API error: {message} (code: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL: {message} {location}")]
    InvalidUrl {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Network, timeout or body read failure
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Response body that is not a valid result envelope
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error for an HTTP status
    #[track_caller]
    pub fn api_error<S: Into<String>>(status: u16, message: S) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url<S: Into<String>>(message: S) -> Self {
        ClientError::InvalidUrl {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Error name shown next to the message in transport notifications
    pub fn name(&self) -> &'static str {
        match self {
            Self::Http { .. } => "HttpError",
            Self::Api { .. } => "ApiError",
            Self::Json { .. } => "JsonError",
            Self::InvalidUrl { .. } => "InvalidUrl",
        }
    }

    /// Message without the location suffix
    pub fn message(&self) -> String {
        match self {
            Self::Http { message, .. }
            | Self::Json { message, .. }
            | Self::InvalidUrl { message, .. } => message.clone(),
            Self::Api { status, message, .. } => format!("{message} (code: {status})"),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<ClientError> for CoreError {
    #[track_caller]
    fn from(err: ClientError) -> Self {
        CoreError::transport(err.name(), err.message())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

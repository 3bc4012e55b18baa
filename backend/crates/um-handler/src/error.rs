use crate::form::user_field::UserField;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;
use um_client::ClientError;
use um_core::CoreError;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Form has no '{field}' field {location}")]
    MissingField {
        field: UserField,
        location: ErrorLocation,
    },

    #[error("{source}")]
    Core {
        #[source]
        source: CoreError,
    },

    #[error("HTTP client setup failed: {source}")]
    Client {
        #[source]
        source: ClientError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl HandlerError {
    #[track_caller]
    pub fn missing_field(field: UserField) -> Self {
        HandlerError::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        HandlerError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Human readable text for notifications
    pub fn message(&self) -> String {
        match self {
            Self::MissingField { field, .. } => format!("form has no '{field}' field"),
            Self::Core { source } => source.message(),
            Self::Client { source } => source.message(),
            Self::Logger { message, .. } => message.clone(),
        }
    }
}

impl From<CoreError> for HandlerError {
    fn from(source: CoreError) -> Self {
        HandlerError::Core { source }
    }
}

impl From<ClientError> for HandlerError {
    fn from(source: ClientError) -> Self {
        HandlerError::Client { source }
    }
}

pub type HandlerResult<T> = StdResult<T, HandlerError>;

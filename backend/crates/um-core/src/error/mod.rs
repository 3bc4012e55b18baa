use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid date of birth: {value} {location}")]
    InvalidDateOfBirth {
        value: String,
        location: ErrorLocation,
    },

    /// The request never completed normally (network, HTTP status, decoding).
    #[error("{name}: {message} {location}")]
    Transport {
        name: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport<S: Into<String>>(name: &'static str, message: S) -> Self {
        CoreError::Transport {
            name,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short error name shown to the user next to the message.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "ValidationError",
            Self::InvalidDateOfBirth { .. } => "InvalidDateOfBirth",
            Self::Transport { name, .. } => *name,
        }
    }

    /// Message without the source location suffix.
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } | Self::Transport { message, .. } => message.clone(),
            Self::InvalidDateOfBirth { value, .. } => {
                format!("'{value}' is not a valid date of birth")
            }
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

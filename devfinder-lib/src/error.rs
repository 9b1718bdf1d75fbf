use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures outside of a lookup itself: locating, reading and writing configuration, and
/// setting up the HTTP client.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not determine the configuration directory, is $HOME set?")]
    NoConfigDir,
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
    #[error("Invalid directory base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

const NO_RESULTS: &str = "No results";
const GENERIC_FAILURE: &str = "Something went wrong";

/// The one way a lookup can fail.
///
/// Unknown handles, server errors, unreachable hosts and undecodable bodies all end up here and
/// are shown to the user the same way; only the message differs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LookupError {
    message: String,
}

impl LookupError {
    /// The directory answered with a non-success status.
    pub fn no_results() -> Self {
        Self {
            message: NO_RESULTS.into(),
        }
    }

    /// The request never produced a usable body. Uses the cause's own message when it has one.
    pub fn from_cause(cause: &dyn std::error::Error) -> Self {
        let message = cause.to_string();
        if message.trim().is_empty() {
            Self {
                message: GENERIC_FAILURE.into(),
            }
        } else {
            Self { message }
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

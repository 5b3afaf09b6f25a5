// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Only the edges of the application can fail: reading `settings.toml`,
//! reading an external catalog file, validating the galleries it declares,
//! and fetching the contact QR code.
//! The carousel itself is total over valid state and has its own
//! [`CarouselError`](crate::carousel::CarouselError) for the one irregular input.

use crate::content::ContentError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Content Error: {0}")]
    Content(#[from] ContentError),

    #[error("Network Error: {0}")]
    Network(String),
}

impl Error {
    /// Returns the i18n message key used when surfacing this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Content(content) => content.i18n_key(),
            Error::Network(_) => "error-network",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

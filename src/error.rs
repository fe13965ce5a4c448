// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced while filling the gallery.
///
/// Failures are local to a single tile or configuration value and never fatal:
/// a tile that cannot be fetched or decoded renders as a fallback card while
/// the rest of the gallery keeps loading.
#[derive(Debug, Clone)]
pub enum Error {
    /// The image bytes could not be fetched from the remote host.
    Http(String),
    /// The fetched bytes could not be decoded into pixels.
    Decode(String),
    /// A configuration value was rejected.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A page region (or the team id itself) the pipeline depends on is missing.
    #[error("{resource} not found at {locator}")]
    ResourceNotFound {
        resource: &'static str,
        locator: String,
    },

    /// The page never loaded: transport error or non-success status.
    #[error("failed to load {url}: {reason}")]
    NavigationFailure { url: String, reason: String },

    /// A stat cell after the identity column did not parse as a number.
    #[error("column {label}: {value:?} is not numeric")]
    NotNumeric { label: String, value: String },

    #[error("invalid selector {css:?}: {reason}")]
    Selector { css: String, reason: String },

    #[error("config {path}:{line}: {reason}")]
    Config {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Region missing from an already parsed document; the locator is
    /// filled in by the fetch layer via [`Error::at`].
    pub fn missing(resource: &'static str) -> Self {
        Error::ResourceNotFound { resource, locator: s!() }
    }

    /// Attach the page URL to a `ResourceNotFound` raised during extraction.
    pub fn at(self, url: &str) -> Self {
        match self {
            Error::ResourceNotFound { resource, locator } if locator.is_empty() => {
                Error::ResourceNotFound { resource, locator: s!(url) }
            }
            other => other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ResourceNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_fills_only_empty_locator() {
        let e = Error::missing("roster").at("https://example.test/team/1/x");
        assert_eq!(e.to_string(), "roster not found at https://example.test/team/1/x");

        let e = Error::ResourceNotFound { resource: "team id", locator: s!("martians") }
            .at("https://elsewhere");
        assert_eq!(e.to_string(), "team id not found at martians");
    }

    #[test]
    fn at_leaves_other_errors_alone() {
        let e = Error::NotNumeric { label: s!("PTS"), value: s!("-") }.at("u");
        assert!(!e.is_not_found());
        assert_eq!(e.to_string(), "column PTS: \"-\" is not numeric");
    }
}

//! Error types for the landing site.
use std::fmt::{self, Debug, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are printed with Debug, redirect to the thiserror Display.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum ContentError {
    #[error("Failed to read content document: {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Content document is not valid JSON")]
    Malformed(#[source] serde_json::Error),
    #[error("Content document must be a JSON object mapping section names to payloads")]
    NotAnObject,
}

#[derive(Error)]
pub enum BuildError {
    #[error(
        "The content document could not be loaded and `strict_content` is enabled. Disable it to build the site with placeholders instead."
    )]
    ContentUnavailable,
    #[error("Failed to write page `{route}` to {path}")]
    WriteFailed {
        route: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to copy static files from {path}")]
    StaticCopyFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error)]
pub enum SubmitError {
    #[error("Form endpoint answered with status {0}")]
    Status(u16),
    #[error("Failed to reach form endpoint: {0}")]
    Transport(String),
}

/// Errors failing a build. Content and submission problems never get here, they degrade to placeholders and
/// [`SubmissionOutcome::Failed`](crate::signup::SubmissionOutcome::Failed).
#[derive(Error, Debug)]
pub enum LandingError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl_debug_for_error!(ContentError, BuildError, SubmitError);

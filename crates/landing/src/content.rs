//! Loading of the content document driving every text on the site.
//!
//! The document is a JSON object mapping section names (`Header`, `Team`, ...) to their payload. It is read once per
//! build and never mutated afterwards. Loading is all-or-nothing: either [`Loadable::Loaded`] holds the full document
//! or the state is [`Loadable::NotLoaded`] and every section renders its placeholder.
use std::{fs, path::Path, time::Instant};

use log::{info, warn};
use serde_json::{Map, Value};

use crate::errors::ContentError;
use crate::logging::{FormatElapsedTimeOptions, format_elapsed_time};

mod sections;

pub use sections::*;

/// Either a value that has been loaded, or the sentinel for "not available yet".
///
/// Replaces the implicit "empty mapping means loading" convention: whoever holds a `Loadable` has to decide, once,
/// what to do when the value is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    NotLoaded,
    Loaded(T),
}

impl<T> Loadable<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Loadable::Loaded(_))
    }

    pub fn as_ref(&self) -> Loadable<&T> {
        match self {
            Loadable::NotLoaded => Loadable::NotLoaded,
            Loadable::Loaded(value) => Loadable::Loaded(value),
        }
    }

    pub fn loaded(self) -> Option<T> {
        match self {
            Loadable::NotLoaded => None,
            Loadable::Loaded(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for Loadable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Loadable::Loaded(value),
            None => Loadable::NotLoaded,
        }
    }
}

/// The parsed content document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentDocument {
    sections: Map<String, Value>,
}

impl ContentDocument {
    /// Parses a document from its JSON source. The root must be an object.
    pub fn from_json(source: &str) -> Result<Self, ContentError> {
        let value: Value = serde_json::from_str(source).map_err(ContentError::Malformed)?;

        match value {
            Value::Object(sections) => Ok(Self { sections }),
            _ => Err(ContentError::NotAnObject),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ContentError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&source)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn raw_section(&self, name: &str) -> Option<&Value> {
        self.sections.get(name)
    }

    /// Returns the typed payload of section `S`.
    ///
    /// A section that is missing, or whose payload doesn't have the expected shape, is `None`. Shape mismatches are
    /// logged since they usually mean a typo in the document.
    pub fn section<S: Section>(&self) -> Option<S> {
        let raw = self.raw_section(S::NAME)?;

        match S::deserialize(raw) {
            Ok(section) => Some(section),
            Err(err) => {
                warn!(target: "content", "section `{}` does not match its expected shape and will render as a placeholder: {}", S::NAME, err);
                None
            }
        }
    }
}

/// Reads the content document at `path` once.
///
/// Failing to read or parse the document is not an error for the site: the state simply stays
/// [`Loadable::NotLoaded`] and a warning is emitted.
pub fn load_content(path: impl AsRef<Path>) -> Loadable<ContentDocument> {
    let path = path.as_ref();
    let load_start = Instant::now();

    match ContentDocument::load(path) {
        Ok(document) => {
            info!(target: "content", "{} loaded ({} sections) in {}", path.display(), document.sections.len(), format_elapsed_time(load_start.elapsed(), &FormatElapsedTimeOptions::default()));
            Loadable::Loaded(document)
        }
        Err(err) => {
            warn!(target: "content", "{}, every section will render its placeholder", err);
            Loadable::NotLoaded
        }
    }
}

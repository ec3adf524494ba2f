//! Error types for loading and writing theme files.
//!
//! Resolution itself never fails: see [`ResolveIssue`](crate::ResolveIssue)
//! for the soft, diagnostic-only taxonomy.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing a theme file.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The file could not be read or written.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed XML.
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Serializing a theme to XML failed.
    #[error("failed to write XML: {0}")]
    Write(#[from] std::io::Error),

    /// Malformed attribute on an XML element.
    #[error("malformed XML attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// The XML is well-formed but does not have the expected shape.
    #[error("unexpected scheme layout: {0}")]
    Deserialize(#[from] quick_xml::DeError),

    /// A required element is absent.
    #[error("missing <{element}> element")]
    MissingElement { element: &'static str },

    /// A required attribute is absent on an element.
    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    /// An attribute is present but its value cannot be interpreted.
    #[error("invalid value '{value}' for attribute '{attribute}'")]
    InvalidAttribute {
        attribute: &'static str,
        value: String,
    },
}

impl ThemeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ThemeError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for theme I/O.
pub type Result<T> = std::result::Result<T, ThemeError>;

//! Per-field resolution diagnostics.
//!
//! Every `(key, field)` slot the resolver visits produces one
//! [`Diagnostic`]. It is emitted as a `tracing` event at the moment it is
//! recorded and also collected into a [`ResolveReport`] so callers can
//! inspect the outcome without installing a subscriber.

use std::fmt;

use thiserror::Error;

/// Why a field was left at its donor value.
///
/// None of these abort a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveIssue {
    /// The field has no Rider counterpart on the attribute path.
    #[error("unknown attribute field '{field}'")]
    UnsupportedFieldKind { field: String },

    /// The mapped Rider attribute is not defined by the source scheme.
    #[error("couldn't resolve rider attribute '{attribute}'")]
    UnresolvedSourceAttribute { attribute: String },

    /// The Rider attribute exists but lacks the translated field.
    #[error("rider attribute '{attribute}' has no {field}")]
    MissingAttributeField { attribute: String, field: String },

    /// The mapped Rider color is not defined by the source scheme.
    #[error("couldn't find rider color '{color}'")]
    UnresolvedSourceColor { color: String },

    /// No table maps this slot.
    #[error("unknown key")]
    UnmappedKey,
}

/// Which table supplied a rewritten value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingSource {
    /// A literal from the hardcoded table.
    Hardcoded { value: String },
    /// A Rider attribute field.
    Attribute { attribute: String, field: String },
    /// A Rider color.
    Color { color: String },
}

impl fmt::Display for MappingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingSource::Hardcoded { value } => write!(f, "hardcoded {}", value),
            MappingSource::Attribute { attribute, field } => {
                write!(f, "attribute {}.{}", attribute, field)
            }
            MappingSource::Color { color } => write!(f, "color {}", color),
        }
    }
}

/// What happened to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The value was replaced.
    Mapped(MappingSource),
    /// The key's `name` field on the attribute path; not a color.
    Skipped,
    /// The donor value was kept.
    Unchanged(ResolveIssue),
}

/// Diagnostic level, mirrored onto `tracing` levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warn,
}

/// The outcome for one `(key, field)` slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub key: String,
    pub field: String,
    pub outcome: Outcome,
}

impl Diagnostic {
    /// Log level this diagnostic is emitted at.
    pub fn severity(&self) -> Severity {
        match self.outcome {
            Outcome::Mapped(_) => Severity::Info,
            Outcome::Skipped => Severity::Debug,
            Outcome::Unchanged(_) => Severity::Warn,
        }
    }

    /// The issue, when the field was left unchanged.
    pub fn issue(&self) -> Option<&ResolveIssue> {
        match &self.outcome {
            Outcome::Unchanged(issue) => Some(issue),
            _ => None,
        }
    }

    fn emit(&self) {
        let (key, field) = (self.key.as_str(), self.field.as_str());
        match &self.outcome {
            Outcome::Mapped(source) => tracing::info!(key, field, "mapping from {}", source),
            Outcome::Skipped => tracing::debug!(key, field, "skipping name field"),
            Outcome::Unchanged(issue) => tracing::warn!(key, field, "{}", issue),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: ", self.key, self.field)?;
        match &self.outcome {
            Outcome::Mapped(source) => write!(f, "mapped from {}", source),
            Outcome::Skipped => write!(f, "skipped"),
            Outcome::Unchanged(issue) => write!(f, "{}", issue),
        }
    }
}

/// Diagnostics from one resolver run, in visiting order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveReport {
    diagnostics: Vec<Diagnostic>,
}

impl ResolveReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and emits it as a `tracing` event.
    pub fn record(&mut self, key: &str, field: &str, outcome: Outcome) {
        let diagnostic = Diagnostic {
            key: key.to_string(),
            field: field.to_string(),
            outcome,
        };
        diagnostic.emit();
        self.diagnostics.push(diagnostic);
    }

    /// Diagnostics in visiting order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Number of visited fields.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// True when no field was visited.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostic for `key.field`, if it was visited.
    pub fn get(&self, key: &str, field: &str) -> Option<&Diagnostic> {
        self.diagnostics
            .iter()
            .find(|d| d.key == key && d.field == field)
    }

    /// Number of fields whose value was replaced.
    pub fn mapped_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.outcome, Outcome::Mapped(_)))
            .count()
    }

    /// Number of fields left at their donor value with an issue.
    pub fn unchanged_count(&self) -> usize {
        self.issues().count()
    }

    /// Diagnostics for fields left unchanged.
    pub fn issues(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.issue().is_some())
    }
}

impl<'a> IntoIterator for &'a ResolveReport {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

//! Field-by-field resolution of a donor theme against a Rider scheme.
//!
//! For every key `K` of the donor and every field `F` on it, the tables are
//! tried in order and the first match wins:
//!
//! 1. hardcoded `(K, F)`: assign the literal;
//! 2. attribute `K`: translate `F` (`fg`/`bg`), look the attribute and its
//!    field up in the scheme, assign the converted color;
//! 3. color `(K, F)`: look the color up in the scheme, assign the converted
//!    color;
//! 4. otherwise leave the field alone.
//!
//! A failed lookup never aborts: the donor value stays and a warning is
//! recorded.

use crate::color::convert_color;
use crate::diagnostic::{MappingSource, Outcome, ResolveIssue, ResolveReport};
use crate::donor::DestinationTheme;
use crate::source::SourceTheme;
use crate::tables::{MappingTables, SourceField, NAME_FIELD};

/// Rewrites donor field values from a source scheme.
///
/// The resolver keeps no state between runs beyond its tables.
///
/// # Example
///
/// ```rust
/// use dnspy_themegen::{AttributeResolver, DestinationTheme, SourceTheme, ThemeColor};
///
/// let source = SourceTheme::named("Night Owl")
///     .with_attribute("DEFAULT_KEYWORD", [("FOREGROUND", "ff0000")]);
/// let mut donor = DestinationTheme::new("dark")
///     .with_color(ThemeColor::new("opcode").with_field("fg", "000000"));
///
/// let report = AttributeResolver::new().resolve(&source, &mut donor);
///
/// assert_eq!(donor.value("opcode", "fg"), Some("#ff0000"));
/// assert_eq!(report.mapped_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct AttributeResolver {
    tables: MappingTables,
}

impl Default for AttributeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeResolver {
    /// Creates a resolver over the built-in tables.
    pub fn new() -> Self {
        Self::with_tables(MappingTables::builtin())
    }

    /// Creates a resolver over custom tables.
    pub fn with_tables(tables: MappingTables) -> Self {
        Self { tables }
    }

    /// The tables consulted by [`resolve`](Self::resolve).
    pub fn tables(&self) -> &MappingTables {
        &self.tables
    }

    /// Resolves every field of `destination` in place.
    ///
    /// Keys and fields are only rewritten, never added or removed.
    pub fn resolve(
        &self,
        source: &SourceTheme,
        destination: &mut DestinationTheme,
    ) -> ResolveReport {
        let mut report = ResolveReport::new();
        for color in &mut destination.colors {
            let key = color.key().to_string();
            let fields: Vec<String> = color.fields().map(|f| f.name().to_string()).collect();
            for field in fields {
                let (outcome, value) = self.resolve_slot(source, &key, &field);
                if let Some(value) = value {
                    color.set(&field, value);
                }
                report.record(&key, &field, outcome);
            }
        }
        report
    }

    /// Like [`resolve`](Self::resolve), taking and returning the destination by value.
    pub fn apply(
        &self,
        source: &SourceTheme,
        mut destination: DestinationTheme,
    ) -> (DestinationTheme, ResolveReport) {
        let report = self.resolve(source, &mut destination);
        (destination, report)
    }

    /// Decides the outcome for one slot without touching the destination.
    pub fn resolve_field(&self, source: &SourceTheme, key: &str, field: &str) -> Outcome {
        self.resolve_slot(source, key, field).0
    }

    fn resolve_slot(
        &self,
        source: &SourceTheme,
        key: &str,
        field: &str,
    ) -> (Outcome, Option<String>) {
        if let Some(value) = self.tables.hardcoded(key, field) {
            let mapping = MappingSource::Hardcoded {
                value: value.to_string(),
            };
            return (Outcome::Mapped(mapping), Some(value.to_string()));
        }

        if let Some(attribute) = self.tables.attribute(key) {
            return resolve_attribute(source, attribute, field);
        }

        if let Some(color) = self.tables.color(key, field) {
            return match source.color(color) {
                Some(raw) => (
                    Outcome::Mapped(MappingSource::Color {
                        color: color.to_string(),
                    }),
                    Some(convert_color(raw)),
                ),
                None => unchanged(ResolveIssue::UnresolvedSourceColor {
                    color: color.to_string(),
                }),
            };
        }

        unchanged(ResolveIssue::UnmappedKey)
    }
}

fn unchanged(issue: ResolveIssue) -> (Outcome, Option<String>) {
    (Outcome::Unchanged(issue), None)
}

fn resolve_attribute(
    source: &SourceTheme,
    attribute: &str,
    field: &str,
) -> (Outcome, Option<String>) {
    let Some(source_field) = SourceField::from_destination(field) else {
        if field == NAME_FIELD {
            return (Outcome::Skipped, None);
        }
        return unchanged(ResolveIssue::UnsupportedFieldKind {
            field: field.to_string(),
        });
    };

    let Some(fields) = source.attribute(attribute) else {
        return unchanged(ResolveIssue::UnresolvedSourceAttribute {
            attribute: attribute.to_string(),
        });
    };

    let Some(raw) = fields.get(source_field.as_str()) else {
        return unchanged(ResolveIssue::MissingAttributeField {
            attribute: attribute.to_string(),
            field: source_field.as_str().to_string(),
        });
    };

    let mapping = MappingSource::Attribute {
        attribute: attribute.to_string(),
        field: source_field.as_str().to_string(),
    };
    (Outcome::Mapped(mapping), Some(convert_color(raw)))
}

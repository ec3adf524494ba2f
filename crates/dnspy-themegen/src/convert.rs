//! End-to-end conversion: identity stamping plus field resolution.

use crate::diagnostic::ResolveReport;
use crate::donor::DestinationTheme;
use crate::identity::{ThemeIdentity, DEFAULT_ORDER};
use crate::resolver::AttributeResolver;
use crate::source::SourceTheme;

/// Knobs for a conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Menu position written to the output theme.
    pub order: f64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
        }
    }
}

/// A converted theme and the diagnostics that produced it.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub theme: DestinationTheme,
    pub report: ResolveReport,
}

/// Converts Rider schemes onto a dnSpy donor theme.
///
/// # Example
///
/// ```rust
/// use dnspy_themegen::{Converter, DestinationTheme, SourceTheme, ThemeColor};
///
/// let source = SourceTheme::named("Night Owl");
/// let donor = DestinationTheme::new("dark")
///     .with_color(ThemeColor::new("treeviewitemselected").with_field("bg", "#333333"));
///
/// let conversion = Converter::default().convert(&source, donor);
///
/// assert_eq!(conversion.theme.name(), "night_owl");
/// assert_eq!(conversion.theme.value("treeviewitemselected", "bg"), Some("#1FFFFFFF"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
    resolver: AttributeResolver,
}

impl Converter {
    /// Creates a converter over the built-in tables.
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            resolver: AttributeResolver::new(),
        }
    }

    /// Replaces the resolver, returning `self` for chaining.
    pub fn with_resolver(mut self, resolver: AttributeResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// The options this converter stamps with.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Stamps a new identity onto `donor` and resolves its fields from `source`.
    pub fn convert(&self, source: &SourceTheme, mut donor: DestinationTheme) -> Conversion {
        let identity = ThemeIdentity::from_source_name(source.name(), self.options.order);
        tracing::debug!(
            name = identity.name.as_str(),
            guid = identity.guid.as_str(),
            "stamping theme identity"
        );
        identity.apply_to(&mut donor);

        let report = self.resolver.resolve(source, &mut donor);
        tracing::info!(
            mapped = report.mapped_count(),
            unchanged = report.unchanged_count(),
            "converted {} onto donor",
            source.name()
        );
        Conversion {
            theme: donor,
            report,
        }
    }
}

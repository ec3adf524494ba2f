//! Mapping tables from dnSpy theme slots to Rider scheme entries.
//!
//! Three tables are consulted in a fixed order by the resolver:
//!
//! 1. **Hardcoded**: `(key, field)` → literal dnSpy value.
//! 2. **Attributes**: `key` → Rider attribute (syntax class). The field is
//!    translated with [`SourceField`].
//! 3. **Colors**: `(key, field)` → Rider color (editor chrome).
//!
//! [`MappingTables::builtin`] loads the shipped data. The builder methods
//! let callers start from [`MappingTables::new`] and assemble their own.

use std::collections::HashMap;

const HARDCODED: &[(&str, &str, &str)] = &[
    ("treeviewitemselected", "bg", "#1FFFFFFF"),
    ("treeviewitemmouseover", "bg", "#3FFFFFFF"),
    ("environmentfiletabborder", "bg", "transparent"),
];

// Not mapped yet: sealedtype, module, preprocessortext.
const ATTRIBUTES: &[(&str, &str)] = &[
    ("defaulttext", "TEXT"),
    ("operator", "DEFAULT_OPERATION_SIGN"),
    ("punctuation", "DEFAULT_DOT"),
    ("number", "DEFAULT_NUMBER"),
    ("comment", "DEFAULT_LINE_COMMENT"),
    ("keyword", "DEFAULT_KEYWORD"),
    ("string", "DEFAULT_STRING"),
    ("verbatimstring", "DEFAULT_STRING"),
    ("char", "DEFAULT_STRING"),
    ("namespace", "ReSharper.NAMESPACE_IDENTIFIER"),
    ("type", "DEFAULT_CLASS_NAME"),
    ("statictype", "ReSharper.STATIC_CLASS_IDENTIFIER"),
    ("delegate", "ReSharper.DELEGATE_IDENTIFIER"),
    ("enum", "ReSharper.ENUM_IDENTIFIER"),
    ("interface", "DEFAULT_INTERFACE_NAME"),
    ("valuetype", "ReSharper.STRUCT_IDENTIFIER"),
    ("typegenericparameter", "ReSharper.TYPE_PARAMETER_IDENTIFIER"),
    ("methodgenericparameter", "ReSharper.TYPE_PARAMETER_IDENTIFIER"),
    ("instancemethod", "DEFAULT_INSTANCE_METHOD"),
    ("staticmethod", "DEFAULT_STATIC_METHOD"),
    ("extensionmethod", "ReSharper.EXTENSION_METHOD_IDENTIFIER"),
    ("instancefield", "DEFAULT_INSTANCE_FIELD"),
    ("instanceevent", "DEFAULT_INSTANCE_FIELD"),
    ("instanceproperty", "DEFAULT_INSTANCE_FIELD"),
    ("enumfield", "DEFAULT_INSTANCE_FIELD"),
    ("literalfield", "DEFAULT_INSTANCE_FIELD"),
    ("staticfield", "DEFAULT_STATIC_FIELD"),
    ("staticevent", "DEFAULT_STATIC_FIELD"),
    ("staticproperty", "DEFAULT_STATIC_FIELD"),
    ("local", "DEFAULT_LOCAL_VARIABLE"),
    ("parameter", "DEFAULT_PARAMETER"),
    ("preprocessorkeyword", "DEFAULT_KEYWORD"),
    ("label", "DEFAULT_LABEL"),
    ("opcode", "DEFAULT_KEYWORD"),
];

const COLORS: &[(&str, &str, &str)] = &[
    ("linenumber", "fg", "LINE_NUMBERS_COLOR"),
    ("selectedtext", "bg", "SELECTION_BACKGROUND"),
    ("inactiveselectedtext", "bg", "SELECTION_BACKGROUND"),
    ("environmentscrollbarthumbbackground", "bg", "ScrollBar.thumbColor"),
    ("environmentscrollbarthumbmouseoverbackground", "bg", "ScrollBar.hoverThumbColor"),
    ("environmentscrollbarbackground", "bg", "ScrollBar.trackColor"),
    ("environmentscrollbararrowbackground", "bg", "ScrollBar.trackColor"),
    ("environmentscrollbararrowdisabledbackground", "bg", "ScrollBar.trackColor"),
    ("treeview", "bg", "PROMOTION_PANE"),
    ("glyphmargin", "bg", "GUTTER_BACKGROUND"),
    // Main window background
    ("environmentbackground", "fg", "PROMOTION_PANE"),
    ("environmentbackground", "bg", "PROMOTION_PANE"),
    ("environmentbackground", "color3", "PROMOTION_PANE"),
    ("environmentbackground", "color4", "PROMOTION_PANE"),
    // Top toolbar
    ("toolbarhorizontalbackground", "fg", "PROMOTION_PANE"),
    ("toolbarhorizontalbackground", "bg", "PROMOTION_PANE"),
    ("toolbarhorizontalbackground", "color3", "PROMOTION_PANE"),
    // Main window caption
    ("environmentmainwindowactivecaption", "bg", "PROMOTION_PANE"),
    ("environmentmainwindowinactivecaption", "bg", "PROMOTION_PANE"),
    // Tool window headers
    ("environmenttitlebaractive", "bg", "PROMOTION_PANE"),
    ("environmenttitlebaractivegradient", "bg", "PROMOTION_PANE"),
    ("environmenttitlebaractivegradient", "fg", "PROMOTION_PANE"),
    ("environmenttitlebaractivegradient", "color3", "PROMOTION_PANE"),
    ("environmenttitlebaractivegradient", "color4", "PROMOTION_PANE"),
    ("environmenttitlebarinactive", "bg", "PROMOTION_PANE"),
    ("environmenttitlebarinactivegradient", "bg", "PROMOTION_PANE"),
    ("environmenttitlebarinactivegradient", "fg", "PROMOTION_PANE"),
    ("environmenttitlebarinactivegradient", "color3", "PROMOTION_PANE"),
    ("environmenttitlebarinactivegradient", "color4", "PROMOTION_PANE"),
    // Editor tabs
    ("environmentfiletabbackground", "bg", "PROMOTION_PANE"),
    ("environmentfiletabinactivegradient", "bg", "GUTTER_BACKGROUND"),
    ("environmentfiletabinactivegradient", "fg", "GUTTER_BACKGROUND"),
    ("environmentfiletabinactiveborder", "bg", "GUTTER_BACKGROUND"),
    // Dialog captions and bodies
    ("dialogwindowactivecaption", "bg", "PROMOTION_PANE"),
    ("dialogwindowinactivecaption", "bg", "PROMOTION_PANE"),
    ("dialogwindow", "bg", "PROMOTION_PANE"),
    // Settings tree
    ("appsettingstreeview", "bg", "GUTTER_BACKGROUND"),
];

/// Field name on a dnSpy color entry that holds the key itself.
pub const NAME_FIELD: &str = "name";

/// A Rider attribute field that a dnSpy field can be translated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceField {
    Foreground,
    Background,
}

impl SourceField {
    /// Translates a dnSpy field name (`fg`, `bg`) into its Rider counterpart.
    ///
    /// Returns `None` for every other field, including `name` and the extra
    /// gradient slots (`color3`, `color4`).
    pub fn from_destination(field: &str) -> Option<Self> {
        match field {
            "fg" => Some(SourceField::Foreground),
            "bg" => Some(SourceField::Background),
            _ => None,
        }
    }

    /// The field name as written in a Rider scheme.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceField::Foreground => "FOREGROUND",
            SourceField::Background => "BACKGROUND",
        }
    }
}

impl std::fmt::Display for SourceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type PairTable = HashMap<String, HashMap<String, String>>;

/// The three lookup tables used during resolution.
///
/// Lookups are exact and case-sensitive.
///
/// # Example
///
/// ```rust
/// use dnspy_themegen::MappingTables;
///
/// let tables = MappingTables::new()
///     .with_hardcoded("treeviewitemselected", "bg", "#1FFFFFFF")
///     .with_attribute("keyword", "DEFAULT_KEYWORD")
///     .with_color("linenumber", "fg", "LINE_NUMBERS_COLOR");
///
/// assert_eq!(tables.attribute("keyword"), Some("DEFAULT_KEYWORD"));
/// assert_eq!(tables.color("linenumber", "bg"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MappingTables {
    hardcoded: PairTable,
    attributes: HashMap<String, String>,
    colors: PairTable,
}

impl MappingTables {
    /// Creates empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the tables shipped with the converter.
    pub fn builtin() -> Self {
        let mut tables = Self::new();
        for (key, field, value) in HARDCODED {
            tables = tables.with_hardcoded(*key, *field, *value);
        }
        for (key, attribute) in ATTRIBUTES {
            tables = tables.with_attribute(*key, *attribute);
        }
        for (key, field, color) in COLORS {
            tables = tables.with_color(*key, *field, *color);
        }
        tables
    }

    /// Adds a literal value for `key.field`.
    pub fn with_hardcoded(
        mut self,
        key: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.hardcoded
            .entry(key.into())
            .or_default()
            .insert(field.into(), value.into());
        self
    }

    /// Maps every field of `key` to the Rider attribute `attribute`.
    pub fn with_attribute(mut self, key: impl Into<String>, attribute: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), attribute.into());
        self
    }

    /// Maps `key.field` to the Rider color `color`.
    pub fn with_color(
        mut self,
        key: impl Into<String>,
        field: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        self.colors
            .entry(key.into())
            .or_default()
            .insert(field.into(), color.into());
        self
    }

    /// Literal value for `key.field`, if any.
    pub fn hardcoded(&self, key: &str, field: &str) -> Option<&str> {
        lookup_pair(&self.hardcoded, key, field)
    }

    /// Rider attribute mapped to `key`, if any.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Rider color mapped to `key.field`, if any.
    pub fn color(&self, key: &str, field: &str) -> Option<&str> {
        lookup_pair(&self.colors, key, field)
    }
}

fn lookup_pair<'a>(table: &'a PairTable, key: &str, field: &str) -> Option<&'a str> {
    table.get(key)?.get(field).map(String::as_str)
}

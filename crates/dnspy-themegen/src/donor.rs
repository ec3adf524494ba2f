//! dnSpy themes: the donor that is rewritten, and the conversion output.
//!
//! ```xml
//! <theme guid="..." name="dark" menu-name="_Dark" order="200" is-dark="true">
//!   <colors>
//!     <color name="defaulttext" fg="#DCDCDC" bg="#1E1E1E" />
//!     <color name="environmentbackground" fg="#2D2D30" bg="#2D2D30" color3="#2D2D30" color4="#2D2D30" />
//!   </colors>
//! </theme>
//! ```
//!
//! The set of attributes on `<color>` is open-ended and differs per key, so
//! the document is walked with the `quick_xml` event reader and every
//! attribute is kept, in order. Writing emits the same shape back.

use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Result, ThemeError};
use crate::tables::NAME_FIELD;

const ORDER_DEFAULT: f64 = 1.0;

/// One attribute of a `<color>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorField {
    pub(crate) name: String,
    pub(crate) value: String,
}

impl ColorField {
    /// Attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value, verbatim.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A named color slot of a dnSpy theme.
///
/// `fields` holds every attribute of the element in document order,
/// including `name` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColor {
    key: String,
    pub(crate) fields: Vec<ColorField>,
}

impl ThemeColor {
    /// Creates a slot whose only field is `name`.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            fields: vec![ColorField {
                name: NAME_FIELD.to_string(),
                value: key.clone(),
            }],
            key,
        }
    }

    /// Appends a field, returning `self` for chaining.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(ColorField {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// The key this slot is addressed by.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == field)
            .map(|f| f.value.as_str())
    }

    /// Replaces the value of an existing field.
    ///
    /// Returns `false` and leaves the slot untouched when `field` is absent:
    /// fields are never added after construction.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == field) {
            Some(f) => {
                f.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Every field in document order, `name` included.
    pub fn fields(&self) -> impl Iterator<Item = &ColorField> {
        self.fields.iter()
    }
}

/// A loaded dnSpy theme.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationTheme {
    name: String,
    menu_name: String,
    guid: String,
    order: f64,
    /// Root attributes other than the four above (e.g. `is-dark`).
    extra: Vec<(String, String)>,
    pub(crate) colors: Vec<ThemeColor>,
}

impl DestinationTheme {
    /// Creates an empty theme. `menu_name` starts equal to `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            menu_name: name.clone(),
            name,
            guid: String::new(),
            order: ORDER_DEFAULT,
            extra: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Appends a color slot, returning `self` for chaining.
    pub fn with_color(mut self, color: ThemeColor) -> Self {
        self.colors.push(color);
        self
    }

    /// Appends an extra root attribute, returning `self` for chaining.
    pub fn with_root_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }

    /// Value of the root `name` attribute.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the root `name` attribute.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Value of the root `menu-name` attribute.
    pub fn menu_name(&self) -> &str {
        &self.menu_name
    }

    /// Sets the root `menu-name` attribute.
    pub fn set_menu_name(&mut self, menu_name: impl Into<String>) {
        self.menu_name = menu_name.into();
    }

    /// Value of the root `guid` attribute.
    pub fn guid(&self) -> &str {
        &self.guid
    }

    /// Sets the root `guid` attribute.
    pub fn set_guid(&mut self, guid: impl Into<String>) {
        self.guid = guid.into();
    }

    /// Menu sort order.
    pub fn order(&self) -> f64 {
        self.order
    }

    /// Sets the menu sort order.
    pub fn set_order(&mut self, order: f64) {
        self.order = order;
    }

    /// Root attributes that are carried through untouched.
    pub fn root_attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The first slot named `key`, if any.
    pub fn color(&self, key: &str) -> Option<&ThemeColor> {
        self.colors.iter().find(|c| c.key == key)
    }

    /// Shorthand for `color(key)?.get(field)`.
    pub fn value(&self, key: &str, field: &str) -> Option<&str> {
        self.color(key)?.get(field)
    }

    /// All color slots in document order.
    pub fn colors(&self) -> impl Iterator<Item = &ThemeColor> {
        self.colors.iter()
    }

    /// Parses a theme from XML text.
    ///
    /// # Errors
    ///
    /// Fails on malformed XML, a missing `<theme>` root, a `<color>` without
    /// `name`, or a non-numeric `order`.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut theme: Option<DestinationTheme> = None;
        let mut in_colors = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) if e.name().as_ref() == b"theme" => {
                    theme = Some(parse_root(&e)?);
                }
                Event::Empty(e) if e.name().as_ref() == b"theme" => {
                    theme = Some(parse_root(&e)?);
                }
                Event::Start(e) if e.name().as_ref() == b"colors" => in_colors = true,
                Event::End(e) if e.name().as_ref() == b"colors" => in_colors = false,
                Event::Empty(e) if in_colors && e.name().as_ref() == b"color" => {
                    push_color(&mut theme, parse_color(&e)?)?;
                }
                Event::Start(e) if in_colors && e.name().as_ref() == b"color" => {
                    let color = parse_color(&e)?;
                    reader.read_to_end(e.name())?;
                    push_color(&mut theme, color)?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        theme.ok_or(ThemeError::MissingElement { element: "theme" })
    }

    /// Loads a theme from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::io(path, e))?;
        Self::from_xml(&content)
    }

    /// Serializes the theme as a tab-indented `.dntheme` document.
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let order = self.order.to_string();
        let mut root = BytesStart::new("theme");
        root.push_attribute(("guid", self.guid.as_str()));
        root.push_attribute(("name", self.name.as_str()));
        root.push_attribute(("menu-name", self.menu_name.as_str()));
        root.push_attribute(("order", order.as_str()));
        for (key, value) in &self.extra {
            root.push_attribute((key.as_str(), value.as_str()));
        }
        writer.write_event(Event::Start(root))?;
        writer.write_event(Event::Start(BytesStart::new("colors")))?;

        for color in &self.colors {
            let mut element = BytesStart::new("color");
            for field in &color.fields {
                element.push_attribute((field.name.as_str(), field.value.as_str()));
            }
            writer.write_event(Event::Empty(element))?;
        }

        writer.write_event(Event::End(BytesEnd::new("colors")))?;
        writer.write_event(Event::End(BytesEnd::new("theme")))?;

        let mut xml = String::from_utf8_lossy(&writer.into_inner()).into_owned();
        xml.push('\n');
        Ok(xml)
    }

    /// Writes the theme to `path`, replacing any existing file.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_xml()?).map_err(|e| ThemeError::io(path, e))
    }
}

fn attributes(e: &BytesStart) -> Result<Vec<(String, String)>> {
    let mut out = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        out.push((key, value));
    }
    Ok(out)
}

fn parse_root(e: &BytesStart) -> Result<DestinationTheme> {
    let mut theme = DestinationTheme::new("");
    for (key, value) in attributes(e)? {
        match key.as_str() {
            "guid" => theme.guid = value,
            "name" => theme.name = value,
            "menu-name" => theme.menu_name = value,
            "order" => {
                theme.order = value
                    .trim()
                    .parse()
                    .map_err(|_| ThemeError::InvalidAttribute {
                        attribute: "order",
                        value: value.clone(),
                    })?;
            }
            _ => theme.extra.push((key, value)),
        }
    }
    Ok(theme)
}

fn parse_color(e: &BytesStart) -> Result<ThemeColor> {
    let fields: Vec<ColorField> = attributes(e)?
        .into_iter()
        .map(|(name, value)| ColorField { name, value })
        .collect();
    let key = fields
        .iter()
        .find(|f| f.name == NAME_FIELD)
        .map(|f| f.value.clone())
        .ok_or(ThemeError::MissingAttribute {
            element: "color",
            attribute: "name",
        })?;
    Ok(ThemeColor { key, fields })
}

fn push_color(theme: &mut Option<DestinationTheme>, color: ThemeColor) -> Result<()> {
    let theme = theme
        .as_mut()
        .ok_or(ThemeError::MissingElement { element: "theme" })?;
    theme.colors.push(color);
    Ok(())
}

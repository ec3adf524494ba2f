//! Rider color schemes, the conversion input.
//!
//! A scheme is an XML document of this shape (unrelated elements omitted):
//!
//! ```xml
//! <scheme name="Darcula" version="142" parent_scheme="Default">
//!   <colors>
//!     <option name="GUTTER_BACKGROUND" value="313335" />
//!   </colors>
//!   <attributes>
//!     <option name="DEFAULT_KEYWORD">
//!       <value>
//!         <option name="FOREGROUND" value="cc7832" />
//!       </value>
//!     </option>
//!   </attributes>
//! </scheme>
//! ```
//!
//! The fixed layout is read with serde through `quick_xml::de`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ThemeError};

/// Field name → raw value for one Rider attribute.
pub type AttributeFields = BTreeMap<String, String>;

/// A loaded Rider color scheme.
///
/// Values are kept exactly as written in the scheme: bare hex digits with
/// no `#`, sometimes missing leading zeros. Attributes and colors keep the
/// scheme's document order; a repeated name replaces the earlier entry in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTheme {
    name: String,
    attributes: Vec<(String, AttributeFields)>,
    colors: Vec<(String, String)>,
}

impl SourceTheme {
    /// Creates an empty scheme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds (or replaces) an attribute with its fields, returning `self` for chaining.
    pub fn with_attribute<I, K, V>(mut self, name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        upsert(&mut self.attributes, name.into(), fields);
        self
    }

    /// Adds (or replaces) a color, returning `self` for chaining.
    pub fn with_color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        upsert(&mut self.colors, name.into(), value.into());
        self
    }

    /// Parses a scheme from XML text.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Deserialize`] when the document is malformed
    /// or lacks the `<scheme name="...">` root.
    pub fn from_xml(xml: &str) -> Result<Self> {
        let scheme: SchemeXml = quick_xml::de::from_str(xml)?;
        Ok(scheme.into())
    }

    /// Loads a scheme from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::io(path, e))?;
        Self::from_xml(&content)
    }

    /// Scheme display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields of the attribute `name`, if the scheme defines it.
    pub fn attribute(&self, name: &str) -> Option<&AttributeFields> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, fields)| fields)
    }

    /// Raw value of the color `name`, if the scheme defines it.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes, in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &AttributeFields)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All colors, in document order.
    pub fn colors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[derive(Debug, Deserialize)]
struct SchemeXml {
    #[serde(rename = "@name")]
    name: String,
    #[serde(default)]
    colors: OptionList,
    #[serde(default)]
    attributes: AttributeList,
}

#[derive(Debug, Default, Deserialize)]
struct OptionList {
    #[serde(rename = "option", default)]
    options: Vec<ValueOption>,
}

#[derive(Debug, Deserialize)]
struct ValueOption {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@value", default)]
    value: String,
}

#[derive(Debug, Default, Deserialize)]
struct AttributeList {
    #[serde(rename = "option", default)]
    options: Vec<AttributeOption>,
}

#[derive(Debug, Deserialize)]
struct AttributeOption {
    #[serde(rename = "@name")]
    name: String,
    #[serde(default)]
    value: Option<OptionList>,
}

fn upsert<V>(entries: &mut Vec<(String, V)>, name: String, value: V) {
    match entries.iter_mut().find(|(n, _)| *n == name) {
        Some(entry) => entry.1 = value,
        None => entries.push((name, value)),
    }
}

impl From<SchemeXml> for SourceTheme {
    fn from(scheme: SchemeXml) -> Self {
        let mut theme = SourceTheme::named(scheme.name);
        for option in scheme.colors.options {
            upsert(&mut theme.colors, option.name, option.value);
        }
        for attr in scheme.attributes.options {
            let fields: AttributeFields = attr
                .value
                .map(|list| list.options.into_iter().map(|o| (o.name, o.value)).collect())
                .unwrap_or_default();
            upsert(&mut theme.attributes, attr.name, fields);
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEME: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<scheme name="Night Owl" version="142" parent_scheme="Darcula">
  <metaInfo>
    <property name="ide">Rider</property>
  </metaInfo>
  <option name="LINE_SPACING" value="1.1" />
  <colors>
    <option name="GUTTER_BACKGROUND" value="11161b" />
    <option name="LINE_NUMBERS_COLOR" value="4b6479" />
    <option name="EMPTY_VALUE" />
  </colors>
  <attributes>
    <option name="ABSTRACT_CLASS_NAME_ATTRIBUTES" baseAttributes="DEFAULT_CLASS_NAME" />
    <option name="DEFAULT_KEYWORD">
      <value>
        <option name="FOREGROUND" value="c792ea" />
        <option name="FONT_TYPE" value="2" />
      </value>
    </option>
    <option name="TEXT">
      <value>
        <option name="FOREGROUND" value="d6deeb" />
        <option name="BACKGROUND" value="11161b" />
      </value>
    </option>
  </attributes>
</scheme>"#;

    #[test]
    fn parses_name_colors_and_attributes() {
        let theme = SourceTheme::from_xml(SCHEME).unwrap();
        assert_eq!(theme.name(), "Night Owl");
        assert_eq!(theme.color("GUTTER_BACKGROUND"), Some("11161b"));
        assert_eq!(theme.color("LINE_NUMBERS_COLOR"), Some("4b6479"));

        let keyword = theme.attribute("DEFAULT_KEYWORD").unwrap();
        assert_eq!(keyword.get("FOREGROUND").map(String::as_str), Some("c792ea"));
        assert_eq!(keyword.get("FONT_TYPE").map(String::as_str), Some("2"));
        assert!(keyword.get("BACKGROUND").is_none());

        let text = theme.attribute("TEXT").unwrap();
        assert_eq!(text.get("BACKGROUND").map(String::as_str), Some("11161b"));
    }

    #[test]
    fn option_without_value_is_empty() {
        let theme = SourceTheme::from_xml(SCHEME).unwrap();
        assert_eq!(theme.color("EMPTY_VALUE"), Some(""));
    }

    #[test]
    fn inherited_attribute_has_no_fields() {
        let theme = SourceTheme::from_xml(SCHEME).unwrap();
        let abstract_class = theme.attribute("ABSTRACT_CLASS_NAME_ATTRIBUTES").unwrap();
        assert!(abstract_class.is_empty());
    }

    #[test]
    fn missing_sections_are_empty() {
        let theme = SourceTheme::from_xml(r#"<scheme name="Bare"/>"#).unwrap();
        assert_eq!(theme.name(), "Bare");
        assert_eq!(theme.colors().count(), 0);
        assert_eq!(theme.attributes().count(), 0);
    }

    #[test]
    fn missing_name_is_an_error() {
        let err = SourceTheme::from_xml("<scheme><colors/></scheme>").unwrap_err();
        assert!(matches!(err, ThemeError::Deserialize(_)));
    }

    #[test]
    fn keeps_document_order() {
        let theme = SourceTheme::from_xml(SCHEME).unwrap();
        let colors: Vec<_> = theme.colors().map(|(name, _)| name).collect();
        assert_eq!(colors, ["GUTTER_BACKGROUND", "LINE_NUMBERS_COLOR", "EMPTY_VALUE"]);
        let attributes: Vec<_> = theme.attributes().map(|(name, _)| name).collect();
        assert_eq!(
            attributes,
            ["ABSTRACT_CLASS_NAME_ATTRIBUTES", "DEFAULT_KEYWORD", "TEXT"]
        );
    }

    #[test]
    fn repeated_name_replaces_in_place() {
        let theme = SourceTheme::named("Dup")
            .with_color("B", "1")
            .with_color("A", "2")
            .with_color("B", "3");
        let colors: Vec<_> = theme.colors().collect();
        assert_eq!(colors, [("B", "3"), ("A", "2")]);
    }

    #[test]
    fn builder_matches_parsed_shape() {
        let built = SourceTheme::named("Tiny")
            .with_color("GUTTER_BACKGROUND", "313335")
            .with_attribute("DEFAULT_KEYWORD", [("FOREGROUND", "cc7832")]);
        let parsed = SourceTheme::from_xml(
            r#"<scheme name="Tiny">
                 <colors><option name="GUTTER_BACKGROUND" value="313335"/></colors>
                 <attributes>
                   <option name="DEFAULT_KEYWORD">
                     <value><option name="FOREGROUND" value="cc7832"/></value>
                   </option>
                 </attributes>
               </scheme>"#,
        )
        .unwrap();
        assert_eq!(built, parsed);
    }
}

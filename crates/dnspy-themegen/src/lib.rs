//! Convert JetBrains Rider color schemes into dnSpy themes.
//!
//! A conversion starts from a *donor*: an existing dnSpy theme whose keys
//! and fields are kept exactly as they are, while their values are
//! rewritten from the Rider scheme wherever a mapping exists.
//!
//! # Quick Start
//!
//! ```rust
//! use dnspy_themegen::{Converter, DestinationTheme, SourceTheme};
//!
//! let source = SourceTheme::from_xml(r#"
//! <scheme name="Night Owl">
//!   <attributes>
//!     <option name="DEFAULT_KEYWORD">
//!       <value><option name="FOREGROUND" value="c792ea"/></value>
//!     </option>
//!   </attributes>
//! </scheme>"#).unwrap();
//!
//! let donor = DestinationTheme::from_xml(r##"
//! <theme guid="x" name="dark" menu-name="_Dark" order="200">
//!   <colors>
//!     <color name="keyword" fg="#569CD6" />
//!   </colors>
//! </theme>"##).unwrap();
//!
//! let conversion = Converter::default().convert(&source, donor);
//! assert_eq!(conversion.theme.value("keyword", "fg"), Some("#c792ea"));
//! ```
//!
//! # Resolution Order
//!
//! For each donor `(key, field)` the first match wins:
//!
//! | Step | Table | Lookup |
//! |------|-------|--------|
//! | 1 | hardcoded | `(key, field)` → literal |
//! | 2 | attributes | `key` → Rider attribute, `fg`/`bg` → `FOREGROUND`/`BACKGROUND` |
//! | 3 | colors | `(key, field)` → Rider color |
//! | 4 | none | value left as is |
//!
//! Lookups that fail leave the donor value in place and are reported as a
//! [`ResolveIssue`]; see [`ResolveReport`]. Each diagnostic is also emitted
//! as a `tracing` event.

mod color;
mod convert;
mod diagnostic;
mod donor;
mod error;
mod identity;
mod resolver;
mod source;
mod tables;

// Re-export public API
pub use color::convert_color;
pub use convert::{Conversion, ConvertOptions, Converter};
pub use diagnostic::{Diagnostic, MappingSource, Outcome, ResolveIssue, ResolveReport, Severity};
pub use donor::{ColorField, DestinationTheme, ThemeColor};
pub use error::{Result, ThemeError};
pub use identity::{guid_for, slug, ThemeIdentity, DEFAULT_ORDER};
pub use resolver::AttributeResolver;
pub use source::{AttributeFields, SourceTheme};
pub use tables::{MappingTables, SourceField, NAME_FIELD};

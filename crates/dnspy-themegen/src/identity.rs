//! Identity stamped onto a converted theme.
//!
//! dnSpy tells themes apart by GUID and lists them by menu name and order,
//! so a converted theme gets its own identity derived from the source
//! scheme instead of keeping the donor's.

use sha2::{Digest, Sha256};

use crate::donor::DestinationTheme;

/// Default menu position for converted themes, after every built-in theme.
pub const DEFAULT_ORDER: f64 = 9001.0;

/// Name, menu name, GUID and order of a converted theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeIdentity {
    pub name: String,
    pub menu_name: String,
    pub guid: String,
    pub order: f64,
}

impl ThemeIdentity {
    /// Derives the identity for a scheme called `source_name`.
    ///
    /// ```rust
    /// use dnspy_themegen::ThemeIdentity;
    ///
    /// let id = ThemeIdentity::from_source_name("Night Owl", 9001.0);
    /// assert_eq!(id.name, "night_owl");
    /// assert_eq!(id.menu_name, "Night Owl");
    /// assert_eq!(id.guid.len(), 36);
    /// ```
    pub fn from_source_name(source_name: &str, order: f64) -> Self {
        Self {
            name: slug(source_name),
            menu_name: source_name.to_string(),
            guid: guid_for(source_name),
            order,
        }
    }

    /// Writes this identity onto `theme`.
    pub fn apply_to(&self, theme: &mut DestinationTheme) {
        theme.set_name(self.name.clone());
        theme.set_menu_name(self.menu_name.clone());
        theme.set_guid(self.guid.clone());
        theme.set_order(self.order);
    }
}

/// Lowercases `name` and replaces spaces with underscores.
pub fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// A stable GUID for `name`: the first 16 bytes of its SHA-256 digest.
pub fn guid_for(name: &str) -> String {
    let digest = Sha256::digest(name.as_bytes());
    format!(
        "{}-{}-{}-{}-{}",
        hex(&digest[0..4]),
        hex(&digest[4..6]),
        hex(&digest[6..8]),
        hex(&digest[8..10]),
        hex(&digest[10..16]),
    )
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_joins() {
        assert_eq!(slug("Night Owl"), "night_owl");
        assert_eq!(slug("Darcula"), "darcula");
        assert_eq!(slug("My  Theme"), "my__theme");
    }

    #[test]
    fn guid_is_stable_and_name_specific() {
        let first = guid_for("Night Owl");
        assert_eq!(first, guid_for("Night Owl"));
        assert_ne!(first, guid_for("Darcula"));

        let groups: Vec<usize> = first.split('-').map(str::len).collect();
        assert_eq!(groups, vec![8, 4, 4, 4, 12]);
        assert!(first
            .chars()
            .all(|c| c == '-' || c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn apply_to_overwrites_identity_only() {
        let mut theme = DestinationTheme::new("dark").with_root_attribute("is-dark", "true");
        ThemeIdentity::from_source_name("Night Owl", DEFAULT_ORDER).apply_to(&mut theme);
        assert_eq!(theme.name(), "night_owl");
        assert_eq!(theme.menu_name(), "Night Owl");
        assert_eq!(theme.guid(), guid_for("Night Owl"));
        assert_eq!(theme.order(), 9001.0);
        assert_eq!(theme.root_attributes().count(), 1);
    }
}

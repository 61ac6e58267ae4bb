//! Flat name-to-color index built from a [`Palette`].
//!
//! Each color leaf at dotted path `brand.Primary.500` is registered three
//! times:
//!
//! | Form | Key |
//! |------|-----|
//! | dotted | `brand.Primary.500` |
//! | dashed | `brand-Primary-500` |
//! | dashed, lower-cased | `brand-primary-500` |
//!
//! After flattening, the [alias set](crate::alias) adds its hand-picked keys.
//! The table is read-only once built and is passed by reference to the
//! [`Resolver`](crate::Resolver).

use std::collections::HashMap;

use crate::alias::register_aliases;
use crate::palette::Palette;

/// Flat, multi-keyed index from normalized name to literal color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTable {
    entries: HashMap<String, String>,
}

impl LookupTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table for a palette, including aliases.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tokensmith::{LookupTable, Palette};
    ///
    /// let palette = Palette::from_json(r##"{"colors": {"Storm": {"100": "#DDE6F1"}}}"##).unwrap();
    /// let table = LookupTable::build(&palette);
    ///
    /// assert_eq!(table.get("Storm.100"), Some("#DDE6F1"));
    /// assert_eq!(table.get("Storm-100"), Some("#DDE6F1"));
    /// assert_eq!(table.get("storm-100"), Some("#DDE6F1"));
    /// ```
    pub fn build(palette: &Palette) -> Self {
        let mut table = Self::new();

        for (dotted, color) in palette.colors() {
            let dashed = dotted.replace('.', "-");
            let lowered = dashed.to_lowercase();
            table.insert(dotted, color);
            table.insert(dashed, color);
            table.insert(lowered, color);
        }

        register_aliases(palette, &mut table);

        tracing::debug!(
            colors = palette.len(),
            entries = table.len(),
            "built color lookup table"
        );
        table
    }

    /// Registers `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, color: impl Into<String>) {
        self.entries.insert(key.into(), color.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, color) in iter {
            table.insert(key, color);
        }
        table
    }
}

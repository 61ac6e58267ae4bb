//! Theme mappings: per-theme assignment of UI slots to colors or references.
//!
//! A theme mapping document has one top-level key per theme:
//!
//! ```json
//! {
//!   "light": { "bg": { "surface": "$Colors-base-white" } },
//!   "dark":  { "bg": { "surface": "#111418FF" } }
//! }
//! ```
//!
//! Only `light` and `dark` are read. Either may be absent; absent themes
//! produce no output section. Other top-level keys are ignored.

use std::fmt;
use std::path::Path;

use serde_json::{Map, Value};

use crate::document::{parse_object, read_object, INLINE_SOURCE};
use crate::error::Result;
use crate::resolve::{Resolution, Resolver};

/// The themes a mapping document can define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeName {
    Light,
    Dark,
}

impl ThemeName {
    /// All themes in output order.
    pub const ALL: [ThemeName; 2] = [ThemeName::Light, ThemeName::Dark];

    /// Document key for this theme.
    pub fn key(self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Theme mapping input, holding the raw value of each present theme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeMapping {
    light: Option<Value>,
    dark: Option<Value>,
}

impl ThemeMapping {
    /// Creates a mapping with no themes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for a theme, replacing any previous one.
    pub fn with_theme(mut self, name: ThemeName, value: Value) -> Self {
        *self.slot_mut(name) = Some(value);
        self
    }

    /// Parses a theme mapping document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let document = parse_object(json, Path::new(INLINE_SOURCE))?;
        Ok(Self::from_document(document))
    }

    /// Loads a theme mapping document from disk.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid JSON, or its top level
    /// is not an object.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let document = read_object(path.as_ref())?;
        Ok(Self::from_document(document))
    }

    fn from_document(mut document: Map<String, Value>) -> Self {
        let mut mapping = Self::new();
        for name in ThemeName::ALL {
            *mapping.slot_mut(name) = document.remove(name.key());
        }
        mapping
    }

    fn slot_mut(&mut self, name: ThemeName) -> &mut Option<Value> {
        match name {
            ThemeName::Light => &mut self.light,
            ThemeName::Dark => &mut self.dark,
        }
    }

    pub fn get(&self, name: ThemeName) -> Option<&Value> {
        match name {
            ThemeName::Light => self.light.as_ref(),
            ThemeName::Dark => self.dark.as_ref(),
        }
    }

    /// Present themes in output order.
    pub fn themes(&self) -> impl Iterator<Item = (ThemeName, &Value)> {
        ThemeName::ALL
            .into_iter()
            .filter_map(move |name| self.get(name).map(|value| (name, value)))
    }

    /// Resolves each present theme independently.
    pub fn resolve(&self, resolver: &Resolver<'_>) -> ResolvedThemes {
        let mut resolved = ResolvedThemes::default();
        for (name, value) in self.themes() {
            let resolution = resolver.resolve_scoped(name.key(), value);
            resolved.insert(name, resolution);
        }
        resolved
    }
}

/// Resolved counterpart of [`ThemeMapping`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedThemes {
    light: Option<Resolution>,
    dark: Option<Resolution>,
}

impl ResolvedThemes {
    fn insert(&mut self, name: ThemeName, resolution: Resolution) {
        match name {
            ThemeName::Light => self.light = Some(resolution),
            ThemeName::Dark => self.dark = Some(resolution),
        }
    }

    pub fn get(&self, name: ThemeName) -> Option<&Resolution> {
        match name {
            ThemeName::Light => self.light.as_ref(),
            ThemeName::Dark => self.dark.as_ref(),
        }
    }

    /// Resolved value of a theme, if the theme was present.
    pub fn value(&self, name: ThemeName) -> Option<&Value> {
        self.get(name).map(|r| &r.value)
    }

    /// Present themes in output order.
    pub fn themes(&self) -> impl Iterator<Item = (ThemeName, &Resolution)> {
        ThemeName::ALL
            .into_iter()
            .filter_map(move |name| self.get(name).map(|r| (name, r)))
    }

    /// All unresolved references across themes, light first.
    pub fn unresolved(&self) -> impl Iterator<Item = &crate::resolve::UnresolvedReference> {
        self.themes().flat_map(|(_, r)| r.unresolved.iter())
    }
}

//! Palette model: the nested source-of-truth color definitions.
//!
//! A palette document is a JSON object whose `colors` key holds arbitrarily
//! nested groups of hex colors:
//!
//! ```json
//! {
//!   "colors": {
//!     "base": { "white": "#FFFFFFFF", "black": "#000000FF" },
//!     "storm": { "100": "#DDE6F1FF", "200": "#C5D2E3FF" }
//!   }
//! }
//! ```
//!
//! A value is a color leaf iff it is a string starting with `#`. Objects are
//! groups. Anything else (numbers, other strings, arrays) carries no color
//! and is dropped while converting.
//!
//! Groups keep document order. When two leaves flatten to the same lookup
//! key, the one appearing later in the document wins.
//!
//! # Example
//!
//! ```rust
//! use tokensmith::Palette;
//!
//! let palette = Palette::from_json(r##"{"colors": {"storm": {"100": "#DDE6F1"}}}"##).unwrap();
//! assert_eq!(palette.get("storm", "100"), Some("#DDE6F1"));
//! assert_eq!(palette.len(), 1);
//! ```

use std::path::Path;

use serde_json::Value;

use crate::document::{parse_object, read_object, INLINE_SOURCE};
use crate::error::Result;

/// Key holding the palette inside a palette document.
pub const COLORS_KEY: &str = "colors";

/// Prefix that marks a string as a literal color.
pub const COLOR_PREFIX: char = '#';

/// Returns true if `value` is a literal color string.
pub fn is_color(value: &str) -> bool {
    value.starts_with(COLOR_PREFIX)
}

/// A node of the palette tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteNode {
    /// Literal hex color, e.g. `#AABBCC` or `#AABBCCDD`.
    Color(String),
    /// Nested group of named nodes, in document order.
    Group(PaletteGroup),
}

/// Named nodes in document order. Keys are unique.
pub type PaletteGroup = Vec<(String, PaletteNode)>;

fn find<'a>(group: &'a [(String, PaletteNode)], key: &str) -> Option<&'a PaletteNode> {
    group
        .iter()
        .find_map(|(name, node)| (name == key).then_some(node))
}

impl PaletteNode {
    /// Converts a JSON value, returning `None` for values that are neither
    /// colors nor groups.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if is_color(s) => Some(PaletteNode::Color(s.clone())),
            Value::Object(map) => Some(PaletteNode::Group(group_from_map(map))),
            _ => None,
        }
    }

    /// Returns the color if this node is a leaf.
    pub fn as_color(&self) -> Option<&str> {
        match self {
            PaletteNode::Color(c) => Some(c),
            PaletteNode::Group(_) => None,
        }
    }
}

fn group_from_map(map: &serde_json::Map<String, Value>) -> PaletteGroup {
    map.iter()
        .filter_map(|(key, value)| PaletteNode::from_value(value).map(|node| (key.clone(), node)))
        .collect()
}

/// The full palette: the top-level groups found under `colors`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    root: PaletteGroup,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a palette from the value of a document's `colors` key.
    ///
    /// A value that is not an object yields an empty palette.
    pub fn from_colors(colors: &Value) -> Self {
        match colors {
            Value::Object(map) => Self {
                root: group_from_map(map),
            },
            _ => Self::new(),
        }
    }

    /// Parses a palette document from a JSON string.
    ///
    /// A document without a `colors` key is an empty palette, not an error.
    pub fn from_json(json: &str) -> Result<Self> {
        let document = parse_object(json, Path::new(INLINE_SOURCE))?;
        Ok(Self::from_document(&document))
    }

    /// Loads a palette document from disk.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid JSON, or its top level
    /// is not an object.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let document = read_object(path.as_ref())?;
        Ok(Self::from_document(&document))
    }

    fn from_document(document: &serde_json::Map<String, Value>) -> Self {
        document
            .get(COLORS_KEY)
            .map(Self::from_colors)
            .unwrap_or_default()
    }

    /// Inserts a top-level node. Mostly useful for building palettes in code.
    ///
    /// An existing key is replaced in place; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, node: PaletteNode) {
        let key = key.into();
        match self.root.iter_mut().find(|(name, _)| *name == key) {
            Some((_, existing)) => *existing = node,
            None => self.root.push((key, node)),
        }
    }

    /// Top-level nodes in document order.
    pub fn root(&self) -> &[(String, PaletteNode)] {
        &self.root
    }

    /// Returns true if a top-level key exists, whatever its kind.
    pub fn contains(&self, key: &str) -> bool {
        find(&self.root, key).is_some()
    }

    /// Looks up the color stored at `parent.child`.
    ///
    /// Returns `None` if the parent is missing, is itself a color, or the
    /// child is missing or is a group.
    pub fn get(&self, parent: &str, child: &str) -> Option<&str> {
        match find(&self.root, parent)? {
            PaletteNode::Group(group) => find(group, child)?.as_color(),
            PaletteNode::Color(_) => None,
        }
    }

    /// Every color leaf with its dotted path, in document order.
    pub fn colors(&self) -> Vec<(String, &str)> {
        let mut out = Vec::new();
        collect_colors(&self.root, "", &mut out);
        out
    }

    /// Number of color leaves.
    pub fn len(&self) -> usize {
        self.colors().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn collect_colors<'a>(
    group: &'a [(String, PaletteNode)],
    prefix: &str,
    out: &mut Vec<(String, &'a str)>,
) {
    for (key, node) in group {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match node {
            PaletteNode::Color(color) => out.push((path, color.as_str())),
            PaletteNode::Group(children) => collect_colors(children, &path, out),
        }
    }
}

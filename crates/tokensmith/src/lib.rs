//! # tokensmith - Design Token Resolution
//!
//! `tokensmith` turns a design-token source of truth into build artifacts:
//!
//! - a **palette**: nested color definitions (`{"colors": {"storm": {"100": "#DDE6F1"}}}`)
//! - a **theme mapping**: per-theme UI slots pointing at literal colors or
//!   palette references (`{"light": {"border": "$Colors-storm-100"}}`)
//!
//! become
//!
//! - a resolved JSON document with every reference replaced by its color
//! - a CSS stylesheet exposing the colors as custom properties for light
//!   and dark themes
//!
//! ## Core Concepts
//!
//! - [`Palette`]: the nested color tree, loaded from the palette document
//! - [`LookupTable`]: flat index from normalized names to colors, with aliases
//! - [`Resolver`]: replaces references in any JSON value, best-effort
//! - [`ThemeMapping`]: the `light` / `dark` inputs
//! - [`TokenBuild`]: loads, resolves, renders and writes in one go
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use tokensmith::{LookupTable, Palette, Resolver};
//!
//! let palette = Palette::from_json(r##"{"colors": {"storm": {"100": "#DDE6F1"}}}"##).unwrap();
//! let table = LookupTable::build(&palette);
//! let resolver = Resolver::new(&table);
//!
//! let resolved = resolver.resolve(&json!({ "border": "$Colors-storm-100" }));
//! assert_eq!(resolved.value, json!({ "border": "#DDE6F1" }));
//! ```
//!
//! ## Unresolved References
//!
//! A reference that matches nothing is not an error. It is kept verbatim in
//! both outputs, logged with `tracing::warn!`, and listed in the
//! [`BuildReport`]. Missing inputs and malformed JSON are fatal and abort the
//! build before any file is written.

pub mod alias;
pub mod build;
pub mod config;
mod document;
pub mod emit;
mod error;
pub mod lookup;
pub mod palette;
pub mod reference;
pub mod resolve;
pub mod theme;

pub use alias::{Alias, DerivedAlias, ALIASES, DERIVED_ALIASES};
pub use build::{BuildReport, Rendered, TokenBuild};
pub use config::{BuildConfig, CssConfig, MetaConfig, OutputPaths, CONFIG_FILE_NAME};
pub use error::{Result, TokenError};
pub use lookup::LookupTable;
pub use palette::{Palette, PaletteGroup, PaletteNode};
pub use reference::ReferenceSyntax;
pub use resolve::{Resolution, Resolver, UnresolvedReference};
pub use theme::{ResolvedThemes, ThemeMapping, ThemeName};

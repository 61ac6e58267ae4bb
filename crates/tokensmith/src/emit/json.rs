//! Resolved JSON document.
//!
//! ```json
//! {
//!   "meta": {
//!     "version": "1.0.0",
//!     "description": "...",
//!     "generatedFrom": ["base-styles.json", "sentinel-ds-colors-mapped.json"],
//!     "generatedAt": "2026-10-19T08:30:00.000000Z"
//!   },
//!   "light": { ... },
//!   "dark": { ... }
//! }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::theme::{ResolvedThemes, ThemeName};

/// Metadata block written at the top of the resolved document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub version: String,
    pub description: String,
    /// File names of the palette and theme mapping inputs.
    pub generated_from: Vec<String>,
    /// ISO-8601 UTC timestamp.
    pub generated_at: String,
}

/// Formats a timestamp as ISO-8601 UTC with microseconds and a `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// The resolved document, borrowing theme values from a [`ResolvedThemes`].
#[derive(Debug, Serialize)]
pub struct ResolvedDocument<'a> {
    pub meta: &'a Meta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<&'a Value>,
}

impl<'a> ResolvedDocument<'a> {
    pub fn new(meta: &'a Meta, themes: &'a ResolvedThemes) -> Self {
        Self {
            meta,
            light: themes.value(ThemeName::Light),
            dark: themes.value(ThemeName::Dark),
        }
    }

    /// Serializes with two-space indentation.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

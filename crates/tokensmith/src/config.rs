//! Build configuration.
//!
//! The defaults reproduce the fixed layout of a token directory: the palette
//! and mapping inputs and both outputs live side by side in one base
//! directory. A YAML file can override any subset:
//!
//! ```yaml
//! palette: base-styles.json
//! mapping: sentinel-ds-colors-mapped.json
//! outputs:
//!   json: sentinel-ds-colors-resolved.json
//!   css: sentinel-ds-colors.css
//! meta:
//!   version: 1.0.0
//!   description: Sentinel design system color mappings with resolved hex values
//! css:
//!   title: Sentinel Design System - Color Tokens
//!   light_selector: ":root"
//!   dark_selector: '[data-theme="dark"]'
//! references:
//!   sigil: "$"
//!   namespace: Colors-
//! ```
//!
//! Relative paths resolve against the base directory. When loaded with
//! [`BuildConfig::from_file`], the base directory is the config file's own
//! directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};
use crate::reference::ReferenceSyntax;

/// Conventional config file name looked up in the base directory.
pub const CONFIG_FILE_NAME: &str = "tokensmith.yaml";

/// Output file locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    pub json: PathBuf,
    pub css: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            json: PathBuf::from("sentinel-ds-colors-resolved.json"),
            css: PathBuf::from("sentinel-ds-colors.css"),
        }
    }
}

/// Static parts of the resolved document's `meta` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaConfig {
    pub version: String,
    pub description: String,
}

impl Default for MetaConfig {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            description: "Sentinel design system color mappings with resolved hex values"
                .to_string(),
        }
    }
}

/// Stylesheet settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssConfig {
    /// First line of the header comment.
    pub title: String,
    pub light_selector: String,
    pub dark_selector: String,
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            title: "Sentinel Design System - Color Tokens".to_string(),
            light_selector: ":root".to_string(),
            dark_selector: "[data-theme=\"dark\"]".to_string(),
        }
    }
}

/// Everything a build needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory that relative paths resolve against. Defaults to the
    /// current working directory.
    #[serde(skip)]
    pub base_dir: PathBuf,
    /// Palette document (`{"colors": {...}}`).
    pub palette: PathBuf,
    /// Theme mapping document (`{"light": {...}, "dark": {...}}`).
    pub mapping: PathBuf,
    pub outputs: OutputPaths,
    pub meta: MetaConfig,
    pub css: CssConfig,
    pub references: ReferenceSyntax,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            palette: PathBuf::from("base-styles.json"),
            mapping: PathBuf::from("sentinel-ds-colors-mapped.json"),
            outputs: OutputPaths::default(),
            meta: MetaConfig::default(),
            css: CssConfig::default(),
            references: ReferenceSyntax::default(),
        }
    }
}

impl BuildConfig {
    /// Parses configuration from YAML. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse(yaml, Path::new(crate::document::INLINE_SOURCE))
    }

    /// Loads configuration from a YAML file, using its directory as the
    /// base directory.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TokenError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self::parse(&content, path)?.with_base_dir(base_dir))
    }

    /// Loads `tokensmith.yaml` from `dir` if it exists, otherwise returns
    /// the defaults rooted at `dir`.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::from_file(candidate)
        } else {
            Ok(Self::default().with_base_dir(dir))
        }
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        // An empty document deserializes to null, which serde_yaml rejects.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| TokenError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    pub fn palette_path(&self) -> PathBuf {
        self.base_dir.join(&self.palette)
    }

    pub fn mapping_path(&self) -> PathBuf {
        self.base_dir.join(&self.mapping)
    }

    pub fn json_output_path(&self) -> PathBuf {
        self.base_dir.join(&self.outputs.json)
    }

    pub fn css_output_path(&self) -> PathBuf {
        self.base_dir.join(&self.outputs.css)
    }

    /// Input file names as recorded in `meta.generatedFrom`.
    pub fn source_names(&self) -> Vec<String> {
        [&self.palette, &self.mapping]
            .iter()
            .map(|p| file_name(p))
            .collect()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

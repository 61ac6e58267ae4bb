//! The one-shot token build.
//!
//! A build runs in two phases:
//!
//! 1. **Render**: read both inputs, build the lookup table, resolve every
//!    theme and render both artifacts to strings. Any failure here aborts
//!    before the filesystem is touched.
//! 2. **Commit**: stage each artifact next to its target as `<name>.tmp`,
//!    then rename the staged files into place.
//!
//! Unresolved references never fail a build; they are listed in the
//! returned [`BuildReport`].
//!
//! # Example
//!
//! ```rust,ignore
//! use tokensmith::{BuildConfig, TokenBuild};
//!
//! let config = BuildConfig::discover("./design-tokens")?;
//! let report = TokenBuild::new(&config).run()?;
//! for missing in &report.unresolved {
//!     println!("unresolved {} at {}", missing.reference, missing.path);
//! }
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::config::BuildConfig;
use crate::emit::{format_timestamp, render_stylesheet, Meta, ResolvedDocument};
use crate::error::{Result, TokenError};
use crate::lookup::LookupTable;
use crate::palette::Palette;
use crate::resolve::{Resolver, UnresolvedReference};
use crate::theme::{ResolvedThemes, ThemeMapping, ThemeName};

/// Both artifacts rendered in memory, plus what went into them.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub json: String,
    pub css: String,
    pub themes: ResolvedThemes,
    pub lookup_entries: usize,
}

/// Summary of a completed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub lookup_entries: usize,
    /// Themes present in the mapping, in output order.
    pub themes: Vec<ThemeName>,
    pub unresolved: Vec<UnresolvedReference>,
    pub json_path: PathBuf,
    pub css_path: PathBuf,
}

impl BuildReport {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// A configured build with a fixed generation timestamp.
#[derive(Debug, Clone)]
pub struct TokenBuild<'a> {
    config: &'a BuildConfig,
    generated_at: DateTime<Utc>,
}

impl<'a> TokenBuild<'a> {
    /// Creates a build stamped with the current time.
    pub fn new(config: &'a BuildConfig) -> Self {
        Self {
            config,
            generated_at: Utc::now(),
        }
    }

    /// Pins the generation timestamp.
    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = at;
        self
    }

    fn meta(&self) -> Meta {
        Meta {
            version: self.config.meta.version.clone(),
            description: self.config.meta.description.clone(),
            generated_from: self.config.source_names(),
            generated_at: format_timestamp(self.generated_at),
        }
    }

    /// Resolves and renders already-loaded inputs.
    pub fn render(&self, palette: &Palette, mapping: &ThemeMapping) -> Result<Rendered> {
        let table = LookupTable::build(palette);
        let resolver = Resolver::with_syntax(&table, self.config.references.clone());
        let themes = mapping.resolve(&resolver);

        let meta = self.meta();
        let json = ResolvedDocument::new(&meta, &themes).to_json_string()?;
        let css = render_stylesheet(&themes, &meta, &self.config.css)?;

        Ok(Rendered {
            json,
            css,
            themes,
            lookup_entries: table.len(),
        })
    }

    /// Loads the configured inputs and renders them.
    pub fn load_and_render(&self) -> Result<Rendered> {
        let palette = Palette::from_file(self.config.palette_path())?;
        let mapping = ThemeMapping::from_file(self.config.mapping_path())?;
        self.render(&palette, &mapping)
    }

    /// Runs the full build and writes both artifacts.
    ///
    /// # Errors
    ///
    /// Missing or malformed inputs, render failures and write failures are
    /// fatal. Outputs are only written once everything has rendered.
    pub fn run(&self) -> Result<BuildReport> {
        let rendered = self.load_and_render()?;

        let json_path = self.config.json_output_path();
        let css_path = self.config.css_output_path();
        commit(&[
            (json_path.as_path(), rendered.json.as_str()),
            (css_path.as_path(), rendered.css.as_str()),
        ])?;

        Ok(BuildReport {
            lookup_entries: rendered.lookup_entries,
            themes: rendered.themes.themes().map(|(name, _)| name).collect(),
            unresolved: rendered.themes.unresolved().cloned().collect(),
            json_path,
            css_path,
        })
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> TokenError + '_ {
    move |source| TokenError::Write {
        path: path.to_path_buf(),
        source,
    }
}

fn discard(staged: &[PathBuf]) {
    for path in staged {
        let _ = std::fs::remove_file(path);
    }
}

/// Writes every output or, if staging fails, none of them. Staged files
/// that were not renamed into place are removed on failure.
fn commit(outputs: &[(&Path, &str)]) -> Result<()> {
    let mut staged: Vec<PathBuf> = Vec::with_capacity(outputs.len());

    for (target, content) in outputs {
        let staging = staging_path(target);
        let written = target
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map_or(Ok(()), std::fs::create_dir_all)
            .and_then(|()| std::fs::write(&staging, content));

        if let Err(source) = written {
            discard(&staged);
            return Err(write_error(target)(source));
        }
        staged.push(staging);
    }

    for (index, ((target, content), staging)) in outputs.iter().zip(&staged).enumerate() {
        if let Err(source) = std::fs::rename(staging, target) {
            discard(&staged[index..]);
            return Err(write_error(target)(source));
        }
        tracing::debug!(path = %target.display(), bytes = content.len(), "wrote artifact");
    }
    Ok(())
}

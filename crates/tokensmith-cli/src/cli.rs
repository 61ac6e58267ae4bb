//! Command-line surface.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use console::Style;
use tokensmith::{BuildConfig, BuildReport, TokenBuild};

use crate::logging::Verbosity;

/// Resolve design-token references into JSON and CSS custom properties.
///
/// Reads a palette (`base-styles.json`) and a theme mapping
/// (`sentinel-ds-colors-mapped.json`) from the token directory and writes
/// the resolved JSON document and the CSS stylesheet next to them.
/// A `tokensmith.yaml` in the token directory, if present, overrides the
/// default file names and metadata.
///
/// The token directory is the current working directory unless `--dir` is
/// given. Paths are never resolved against the location of the `tokensmith`
/// executable, so run it from the token directory or pass `-C`.
#[derive(Debug, Parser)]
#[command(name = "tokensmith", version)]
pub struct Cli {
    /// Token directory (defaults to the current working directory, not the executable's)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Configuration file (defaults to <DIR>/tokensmith.yaml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Palette document, relative to the token directory
    #[arg(long, value_name = "FILE")]
    pub palette: Option<PathBuf>,

    /// Theme mapping document, relative to the token directory
    #[arg(long, value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Resolved JSON output, relative to the token directory
    #[arg(long = "json-out", value_name = "FILE")]
    pub json_out: Option<PathBuf>,

    /// CSS output, relative to the token directory
    #[arg(long = "css-out", value_name = "FILE")]
    pub css_out: Option<PathBuf>,

    /// Show debug diagnostics
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    /// Builds the effective configuration: file (explicit or discovered),
    /// then flag overrides.
    pub fn build_config(&self) -> Result<BuildConfig> {
        let dir = self.dir.as_deref().unwrap_or(Path::new("."));

        let mut config = match &self.config {
            Some(path) => {
                let config = BuildConfig::from_file(path)
                    .with_context(|| format!("loading config {}", path.display()))?;
                match &self.dir {
                    Some(dir) => config.with_base_dir(dir),
                    None => config,
                }
            }
            None => BuildConfig::discover(dir)
                .with_context(|| format!("loading config from {}", dir.display()))?,
        };

        if let Some(palette) = &self.palette {
            config.palette = palette.clone();
        }
        if let Some(mapping) = &self.mapping {
            config.mapping = mapping.clone();
        }
        if let Some(json) = &self.json_out {
            config.outputs.json = json.clone();
        }
        if let Some(css) = &self.css_out {
            config.outputs.css = css.clone();
        }
        Ok(config)
    }
}

struct Styles {
    heading: Style,
    ok: Style,
    warn: Style,
    dim: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            heading: Style::new().bold(),
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            dim: Style::new().dim(),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Runs one build stamped with `generated_at`, printing progress unless quiet.
pub fn run(cli: &Cli, generated_at: DateTime<Utc>) -> Result<BuildReport> {
    let config = cli.build_config()?;
    tracing::debug!(?config, "effective configuration");
    let styles = Styles::new();
    let chatty = !cli.quiet;

    if chatty {
        println!("{}\n", styles.heading.apply_to("🎨 Building design tokens..."));
    }

    let report = TokenBuild::new(&config)
        .generated_at(generated_at)
        .run()
        .context("token build failed")?;

    if chatty {
        for path in [&report.json_path, &report.css_path] {
            println!("{} {}", styles.ok.apply_to("✅ Generated:"), display_name(path));
        }
        if !report.is_complete() {
            println!(
                "{}",
                styles.warn.apply_to(format!(
                    "⚠️  {} unresolved reference(s) left verbatim",
                    report.unresolved.len()
                ))
            );
        }
        println!("\n{}\n", styles.heading.apply_to("🎉 Build complete!"));
        println!("Files generated:");
        println!(
            "  - {} {}",
            display_name(&report.json_path),
            styles.dim.apply_to("(for JavaScript import)")
        );
        println!(
            "  - {} {}",
            display_name(&report.css_path),
            styles.dim.apply_to("(for stylesheet import)")
        );
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::TempDir;

    fn write_inputs(dir: &Path) {
        fs::write(
            dir.join("base-styles.json"),
            r##"{"colors": {"storm": {"100": "#DDE6F1"}}}"##,
        )
        .unwrap();
        fs::write(
            dir.join("sentinel-ds-colors-mapped.json"),
            r##"{"light": {"border": "$Colors-storm-100"}, "dark": {"foo": {"bar": "$Colors-does-not-exist"}}}"##,
        )
        .unwrap();
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["tokensmith"]).unwrap();
        assert!(cli.dir.is_none());
        assert_eq!(cli.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["tokensmith", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_flag_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from([
            "tokensmith",
            "--dir",
            dir,
            "--palette",
            "palette.json",
            "--css-out",
            "dist/tokens.css",
        ])
        .unwrap();

        let config = cli.build_config().unwrap();
        assert_eq!(config.palette_path(), temp_dir.path().join("palette.json"));
        assert_eq!(
            config.css_output_path(),
            temp_dir.path().join("dist/tokens.css")
        );
        assert_eq!(
            config.mapping_path(),
            temp_dir.path().join("sentinel-ds-colors-mapped.json")
        );
    }

    #[test]
    fn test_discovers_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("tokensmith.yaml"),
            "outputs:\n  css: colors.css\n",
        )
        .unwrap();
        let dir = temp_dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["tokensmith", "-C", dir]).unwrap();

        let config = cli.build_config().unwrap();
        assert_eq!(config.css_output_path(), temp_dir.path().join("colors.css"));
    }

    #[test]
    fn test_run_writes_outputs_despite_unresolved() {
        let temp_dir = TempDir::new().unwrap();
        write_inputs(temp_dir.path());
        let dir = temp_dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["tokensmith", "-q", "-C", dir]).unwrap();

        let report = run(&cli, at()).unwrap();

        assert_eq!(report.unresolved.len(), 1);
        assert_eq!(report.unresolved[0].reference, "$Colors-does-not-exist");

        let json: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(temp_dir.path().join("sentinel-ds-colors-resolved.json"))
                .unwrap(),
        )
        .unwrap();
        assert_eq!(json["light"]["border"], "#DDE6F1");
        assert_eq!(json["dark"]["foo"]["bar"], "$Colors-does-not-exist");
        assert_eq!(json["meta"]["generatedAt"], "2026-10-19T08:30:00.000000Z");

        let css = fs::read_to_string(temp_dir.path().join("sentinel-ds-colors.css")).unwrap();
        assert!(css.contains("  --border: #DDE6F1;"));
    }

    #[test]
    fn test_run_missing_inputs_fails() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["tokensmith", "-q", "-C", dir]).unwrap();

        let err = run(&cli, at()).unwrap_err();
        assert!(format!("{:#}", err).contains("base-styles.json"));
        assert!(!temp_dir.path().join("sentinel-ds-colors.css").exists());
    }
}

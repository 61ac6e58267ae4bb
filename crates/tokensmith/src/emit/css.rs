//! CSS custom-property stylesheet.
//!
//! Each string leaf of a resolved theme becomes one declaration whose name
//! is the dash-joined key path:
//!
//! ```text
//! { "bg": { "surface": { "card": "#FFFFFF" } } }   =>   --bg-surface-card: #FFFFFF;
//! ```
//!
//! The light theme is emitted under the light selector (`:root`), the dark
//! theme under the dark selector (`[data-theme="dark"]`). Both rules are
//! always emitted; a theme missing from the mapping gets an empty rule. Key
//! names are trusted to be CSS-safe; nothing is escaped or validated.

use std::fmt;

use minijinja::{context, Environment};
use serde_json::Value;

use super::json::Meta;
use crate::config::CssConfig;
use crate::error::Result;
use crate::theme::{ResolvedThemes, ThemeName};

const STYLESHEET_TEMPLATE_NAME: &str = "stylesheet.css";
const STYLESHEET_TEMPLATE: &str = include_str!("stylesheet.css.jinja");

/// One `--name: value;` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomProperty {
    /// Property name without the leading `--`.
    pub name: String,
    pub value: String,
}

impl fmt::Display for CustomProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}: {};", self.name, self.value)
    }
}

/// Flattens a resolved theme into declarations, in traversal order.
///
/// Only string leaves produce declarations. A theme value that is not an
/// object produces none.
///
/// ```rust
/// use serde_json::json;
/// use tokensmith::emit::custom_properties;
///
/// let props = custom_properties(&json!({ "text": { "primary": "#1A1A1AFF" } }));
/// assert_eq!(props[0].to_string(), "--text-primary: #1A1A1AFF;");
/// ```
pub fn custom_properties(theme: &Value) -> Vec<CustomProperty> {
    let mut out = Vec::new();
    if let Value::Object(_) = theme {
        collect(theme, "", &mut out);
    }
    out
}

fn collect(value: &Value, prefix: &str, out: &mut Vec<CustomProperty>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let name = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}-{}", prefix, key)
                };
                collect(child, &name, out);
            }
        }
        Value::String(s) => out.push(CustomProperty {
            name: prefix.to_string(),
            value: s.clone(),
        }),
        _ => {}
    }
}

fn declarations(themes: &ResolvedThemes, name: ThemeName) -> Vec<String> {
    themes
        .value(name)
        .map(custom_properties)
        .unwrap_or_default()
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Renders the full stylesheet: header comment, light rule, dark rule.
///
/// Themes that are absent or have no string leaves get an empty rule.
pub fn render_stylesheet(themes: &ResolvedThemes, meta: &Meta, css: &CssConfig) -> Result<String> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template(STYLESHEET_TEMPLATE_NAME, STYLESHEET_TEMPLATE)?;

    let template = env.get_template(STYLESHEET_TEMPLATE_NAME)?;
    let output = template.render(context! {
        title => css.title,
        sources => meta.generated_from,
        generated_at => meta.generated_at,
        light_selector => css.light_selector,
        dark_selector => css.dark_selector,
        light => declarations(themes, ThemeName::Light),
        dark => declarations(themes, ThemeName::Dark),
    })?;
    Ok(output)
}

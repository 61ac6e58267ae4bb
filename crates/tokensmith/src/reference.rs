//! Variable-reference syntax used by theme mappings.
//!
//! Design tools export references like `$Colors-Brand-App-Background-(Smoke-50)`.
//! Cleaning strips the sigil, the namespace token and parentheses, leaving
//! `Brand-App-Background-Smoke-50`. The cleaned name is then tried against
//! the lookup table in a fixed order:
//!
//! 1. lower-cased (`brand-app-background-smoke-50`)
//! 2. lower-cased with dashes as dots (`brand.app.background.smoke.50`)
//! 3. as written (`Brand-App-Background-Smoke-50`)
//!
//! The first hit wins. Palettes with keys differing only by case or
//! separator can therefore shadow each other.

use serde::{Deserialize, Serialize};

/// Default reference sigil.
pub const DEFAULT_SIGIL: char = '$';

/// Default namespace token removed from references.
pub const DEFAULT_NAMESPACE: &str = "Colors-";

/// Describes how variable references are spelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceSyntax {
    /// Leading character marking a string as a reference.
    pub sigil: char,
    /// Namespace token stripped wherever it occurs.
    pub namespace: String,
}

impl Default for ReferenceSyntax {
    fn default() -> Self {
        Self {
            sigil: DEFAULT_SIGIL,
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl ReferenceSyntax {
    /// Returns true if `value` is spelled as a reference.
    pub fn is_reference(&self, value: &str) -> bool {
        value.starts_with(self.sigil)
    }

    /// Strips every sigil, namespace token and parenthesis from `reference`.
    ///
    /// ```rust
    /// use tokensmith::ReferenceSyntax;
    ///
    /// let syntax = ReferenceSyntax::default();
    /// assert_eq!(
    ///     syntax.clean("$Colors-Brand-App-Background-(Smoke-50)"),
    ///     "Brand-App-Background-Smoke-50"
    /// );
    /// ```
    pub fn clean(&self, reference: &str) -> String {
        let without_sigil: String = reference.chars().filter(|c| *c != self.sigil).collect();
        let without_namespace = if self.namespace.is_empty() {
            without_sigil
        } else {
            without_sigil.replace(&self.namespace, "")
        };
        without_namespace.replace(['(', ')'], "")
    }

    /// Lookup keys to try for `reference`, in priority order.
    pub fn candidates(&self, reference: &str) -> [String; 3] {
        let cleaned = self.clean(reference);
        let lowered = cleaned.to_lowercase();
        let dotted = lowered.replace('-', ".");
        [lowered, dotted, cleaned]
    }
}

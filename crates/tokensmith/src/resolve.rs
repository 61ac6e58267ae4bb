//! Reference resolution over theme mappings.
//!
//! The [`Resolver`] walks a JSON value and replaces every variable reference
//! with the literal color it names. Resolution is best-effort: a reference
//! that matches nothing in the [`LookupTable`] is kept verbatim, logged as a
//! warning and recorded in the returned [`Resolution`]. It never fails.
//!
//! | Input | Output |
//! |-------|--------|
//! | `"#AABBCC"` | unchanged |
//! | `"$Colors-storm-100"` | looked-up color, or unchanged if missing |
//! | object | same keys in the same order, values resolved |
//! | anything else | unchanged |
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use tokensmith::{LookupTable, Resolver};
//!
//! let table: LookupTable = [("storm-100", "#DDE6F1")].into_iter().collect();
//! let resolver = Resolver::new(&table);
//!
//! let resolution = resolver.resolve(&json!({
//!     "border": "$Colors-storm-100",
//!     "focus": "$Colors-missing"
//! }));
//!
//! assert_eq!(resolution.value, json!({
//!     "border": "#DDE6F1",
//!     "focus": "$Colors-missing"
//! }));
//! assert_eq!(resolution.unresolved[0].reference, "$Colors-missing");
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::lookup::LookupTable;
use crate::palette::is_color;
use crate::reference::ReferenceSyntax;

/// A reference that matched no lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedReference {
    /// Dotted key path of the value, including the scope if one was given.
    pub path: String,
    /// The reference exactly as written in the input.
    pub reference: String,
}

/// Output of resolving one value.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// The resolved value, shaped like the input.
    pub value: Value,
    /// References left unresolved, in traversal order.
    pub unresolved: Vec<UnresolvedReference>,
}

impl Resolution {
    /// Returns true if every reference resolved.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Resolves references against a borrowed lookup table.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    table: &'a LookupTable,
    syntax: ReferenceSyntax,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver using the default `$` / `Colors-` syntax.
    pub fn new(table: &'a LookupTable) -> Self {
        Self::with_syntax(table, ReferenceSyntax::default())
    }

    pub fn with_syntax(table: &'a LookupTable, syntax: ReferenceSyntax) -> Self {
        Self { table, syntax }
    }

    pub fn syntax(&self) -> &ReferenceSyntax {
        &self.syntax
    }

    /// Looks up a single reference string, trying each candidate key in order.
    pub fn lookup(&self, reference: &str) -> Option<&'a str> {
        let table: &'a LookupTable = self.table;
        self.syntax
            .candidates(reference)
            .iter()
            .find_map(|key| table.get(key))
    }

    /// Resolves a value with paths reported relative to its root.
    pub fn resolve(&self, value: &Value) -> Resolution {
        self.resolve_scoped("", value)
    }

    /// Resolves a value, prefixing reported paths with `scope`.
    ///
    /// Used to resolve each theme independently while keeping diagnostics
    /// unambiguous (`dark.foo.bar`).
    pub fn resolve_scoped(&self, scope: &str, value: &Value) -> Resolution {
        let mut unresolved = Vec::new();
        let value = self.resolve_value(scope, value, &mut unresolved);
        Resolution { value, unresolved }
    }

    fn resolve_value(
        &self,
        path: &str,
        value: &Value,
        unresolved: &mut Vec<UnresolvedReference>,
    ) -> Value {
        match value {
            Value::String(s) if is_color(s) => value.clone(),
            Value::String(s) if self.syntax.is_reference(s) => match self.lookup(s) {
                Some(color) => Value::String(color.to_string()),
                None => {
                    tracing::warn!(
                        path = %path,
                        reference = %s,
                        "Could not resolve variable: {}",
                        s
                    );
                    unresolved.push(UnresolvedReference {
                        path: path.to_string(),
                        reference: s.clone(),
                    });
                    value.clone()
                }
            },
            Value::Object(map) => {
                let resolved: Map<String, Value> = map
                    .iter()
                    .map(|(key, child)| {
                        let child_path = join_path(path, key);
                        (
                            key.clone(),
                            self.resolve_value(&child_path, child, unresolved),
                        )
                    })
                    .collect();
                Value::Object(resolved)
            }
            _ => value.clone(),
        }
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

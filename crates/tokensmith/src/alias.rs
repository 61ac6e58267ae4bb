//! Hand-curated lookup aliases.
//!
//! Generic flattening registers every palette leaf under its dotted and
//! dashed paths. Design tools sometimes export references under names that
//! flattening cannot produce (`brand-app-background-(smoke-50)`) or that
//! downstream mappings rely on even when the palette is sparse
//! (`border-default`). Those names live here as data.

use crate::lookup::LookupTable;
use crate::palette::Palette;

/// An extra lookup key copied from a palette leaf at `parent.child`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    pub name: &'static str,
    pub parent: &'static str,
    pub child: &'static str,
}

impl Alias {
    const fn new(name: &'static str, parent: &'static str, child: &'static str) -> Self {
        Self {
            name,
            parent,
            child,
        }
    }
}

/// An alias defined in terms of another lookup key, with a fallback color
/// used when that key was never registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedAlias {
    pub name: &'static str,
    pub from: &'static str,
    pub fallback: &'static str,
}

/// Palette aliases, registered in this order after flattening.
pub const ALIASES: &[Alias] = &[
    Alias::new("base-white", "base", "white"),
    Alias::new("base-black", "base", "black"),
    Alias::new("brand-border", "brand", "border"),
    Alias::new("brand-ice-200", "brand", "ice-200"),
    Alias::new(
        "brand-app-background-smoke-50",
        "brand",
        "app-background-smoke-50",
    ),
    Alias::new(
        "brand-app-background-(smoke-50)",
        "brand",
        "app-background-smoke-50",
    ),
    Alias::new("storm-100", "storm", "100"),
    Alias::new("storm-200", "storm", "200"),
    Alias::new("smoke-750", "smoke", "750"),
    Alias::new("gray-true-50", "gray-true", "50"),
];

/// Aliases resolved against the lookup table itself. Registered last.
pub const DERIVED_ALIASES: &[DerivedAlias] = &[DerivedAlias {
    name: "border-default",
    from: "storm-100",
    fallback: "#DDE6F1FF",
}];

/// Registers every alias whose source exists in the palette, then every
/// derived alias. Missing sources are skipped without a diagnostic.
pub fn register_aliases(palette: &Palette, table: &mut LookupTable) {
    for alias in ALIASES {
        if let Some(color) = palette.get(alias.parent, alias.child) {
            table.insert(alias.name, color);
        }
    }

    for derived in DERIVED_ALIASES {
        let color = table
            .get(derived.from)
            .unwrap_or(derived.fallback)
            .to_string();
        table.insert(derived.name, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn palette(colors: serde_json::Value) -> Palette {
        Palette::from_colors(&colors)
    }

    #[test]
    fn test_aliases_registered_when_sources_exist() {
        let palette = palette(json!({
            "base": { "white": "#FFFFFFFF", "black": "#000000FF" },
            "brand": { "app-background-smoke-50": "#F7F9FCFF" }
        }));
        let mut table = LookupTable::new();
        register_aliases(&palette, &mut table);

        assert_eq!(table.get("base-white"), Some("#FFFFFFFF"));
        assert_eq!(table.get("base-black"), Some("#000000FF"));
        assert_eq!(table.get("brand-app-background-smoke-50"), Some("#F7F9FCFF"));
        assert_eq!(
            table.get("brand-app-background-(smoke-50)"),
            Some("#F7F9FCFF")
        );
    }

    #[test]
    fn test_aliases_skip_missing_parent_silently() {
        let mut table = LookupTable::new();
        register_aliases(&Palette::new(), &mut table);

        assert_eq!(table.get("base-white"), None);
        assert_eq!(table.get("storm-100"), None);
        // Only the derived alias survives an empty palette.
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_aliases_skip_missing_child_under_existing_parent() {
        let palette = palette(json!({ "brand": { "border": "#E0E0E0FF" } }));
        let mut table = LookupTable::new();
        register_aliases(&palette, &mut table);

        assert_eq!(table.get("brand-border"), Some("#E0E0E0FF"));
        assert_eq!(table.get("brand-ice-200"), None);
    }

    #[test]
    fn test_border_default_follows_storm_100() {
        let palette = palette(json!({ "storm": { "100": "#AABBCCFF" } }));
        let mut table = LookupTable::new();
        register_aliases(&palette, &mut table);

        assert_eq!(table.get("border-default"), Some("#AABBCCFF"));
    }

    #[test]
    fn test_border_default_fallback() {
        let mut table = LookupTable::new();
        register_aliases(&Palette::new(), &mut table);

        assert_eq!(table.get("border-default"), Some("#DDE6F1FF"));
    }

    #[test]
    fn test_alias_names_are_unique() {
        let mut names: Vec<&str> = ALIASES.iter().map(|a| a.name).collect();
        names.extend(DERIVED_ALIASES.iter().map(|a| a.name));
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}

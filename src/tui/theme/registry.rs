use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::{Theme, ThemeDefinition, ThemeDescriptor};

#[derive(Debug)]
struct ThemeEntry {
    display_name: &'static str,
    aliases: Vec<&'static str>,
    theme: Theme,
}

#[derive(Debug, Default)]
struct ThemeRegistry {
    canonical: BTreeMap<String, ThemeEntry>,
    aliases: HashMap<String, String>,
}

impl ThemeRegistry {
    fn register(&mut self, definition: &ThemeDefinition) {
        let normalized = normalize_name(definition.name);

        for alias in definition.aliases {
            let alias_normalized = normalize_name(alias);
            if alias_normalized != normalized {
                self.aliases.insert(alias_normalized, normalized.clone());
            }
        }

        let mut aliases = definition.aliases.to_vec();
        aliases.sort_unstable_by_key(|alias| alias.to_ascii_lowercase());

        self.canonical.insert(
            normalized,
            ThemeEntry {
                display_name: definition.name,
                aliases,
                theme: definition.theme,
            },
        );
    }

    fn get(&self, name: &str) -> Option<Theme> {
        let normalized = normalize_name(name);

        if let Some(entry) = self.canonical.get(&normalized) {
            return Some(entry.theme);
        }

        let target = self.aliases.get(&normalized)?;
        self.canonical.get(target).map(|entry| entry.theme)
    }
}

fn registry() -> &'static ThemeRegistry {
    static REGISTRY: OnceLock<ThemeRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut registry = ThemeRegistry::default();
        for definition in BUILT_IN_DEFINITIONS {
            registry.register(definition);
        }
        debug_assert_eq!(
            registry.canonical.len(),
            BUILT_IN_DEFINITIONS.len(),
            "duplicate built-in theme names"
        );
        registry
    })
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Look up a theme by name or alias, ignoring case and surrounding spaces.
pub fn by_name(name: &str) -> Option<Theme> {
    registry().get(name)
}

/// Canonical theme names in sorted order.
pub fn names() -> Vec<String> {
    registry()
        .canonical
        .values()
        .map(|entry| entry.display_name.to_string())
        .collect()
}

pub fn descriptors() -> Vec<ThemeDescriptor> {
    registry()
        .canonical
        .values()
        .map(|entry| ThemeDescriptor {
            name: entry.display_name.to_string(),
            aliases: entry.aliases.iter().map(|alias| alias.to_string()).collect(),
            theme: entry.theme,
        })
        .collect()
}

//! Registries produced by the collector and consumed by the emitters

use chroma_core::Argb;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::naming::{Identifier, IdentifierAllocator, NamingRules};
use crate::token::{Mode, TokenPath};

/// A semantic color in one mode
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorValue {
    /// Reference to a generated primitive constant
    Primitive(Identifier),
    /// Literal color, used when no primitive could be found
    Literal(Argb),
    /// No value was declared for this mode
    Unspecified,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimitiveEntry {
    pub path: TokenPath,
    pub identifier: Identifier,
    pub color: Argb,
}

/// Primitive path key -> generated constant, in source order
#[derive(Clone, Debug, Default)]
pub struct PrimitiveRegistry {
    entries: IndexMap<String, PrimitiveEntry>,
    names: IdentifierAllocator,
}

impl PrimitiveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a primitive. Re-registering a path replaces its color and
    /// keeps its identifier and position.
    pub fn insert(&mut self, rules: &NamingRules, path: TokenPath, color: Argb) -> &Identifier {
        let identifier = self.names.allocate(rules, &path);
        let key = path.key();
        let entry = self.entries.entry(key).or_insert_with(|| PrimitiveEntry {
            path,
            identifier,
            color,
        });
        entry.color = color;
        &entry.identifier
    }

    pub fn get(&self, key: &str) -> Option<&PrimitiveEntry> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrimitiveEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Brand path key -> primitive identifier, pre-resolved so that semantic
/// references to brand paths resolve in a single lookup
#[derive(Clone, Debug, Default)]
pub struct BrandRegistry {
    map: FxHashMap<String, Identifier>,
}

impl BrandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: String, primitive: Identifier) {
        self.map.insert(key, primitive);
    }

    pub fn get(&self, key: &str) -> Option<&Identifier> {
        self.map.get(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// One semantic accessor with its per-mode values
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SemanticEntry {
    pub identifier: Identifier,
    light: Option<ColorValue>,
    dark: Option<ColorValue>,
}

impl SemanticEntry {
    /// Light value; `Unspecified` when only a dark value was declared
    pub fn light(&self) -> ColorValue {
        self.light.clone().unwrap_or(ColorValue::Unspecified)
    }

    /// Dark value, falling back to the light value for mode-invariant tokens
    pub fn dark(&self) -> ColorValue {
        self.dark
            .clone()
            .or_else(|| self.light.clone())
            .unwrap_or(ColorValue::Unspecified)
    }

    pub fn value(&self, mode: Mode) -> ColorValue {
        match mode {
            Mode::Light => self.light(),
            Mode::Dark => self.dark(),
        }
    }

    pub fn has_light(&self) -> bool {
        self.light.is_some()
    }

    pub fn has_dark(&self) -> bool {
        self.dark.is_some()
    }
}

/// Identifier -> light/dark pair, merged across the light and dark passes.
///
/// Entries keep the position where either pass first introduced them. Names
/// are allocated per mode, so a light path and a dark path that normalize to
/// the same identifier land in the same entry; suffixes only separate
/// collisions within one mode.
#[derive(Clone, Debug, Default)]
pub struct SemanticRegistry {
    entries: IndexMap<String, SemanticEntry>,
    light_names: IdentifierAllocator,
    dark_names: IdentifierAllocator,
}

impl SemanticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the value of `path` in `mode`
    pub fn record(&mut self, rules: &NamingRules, mode: Mode, path: &TokenPath, value: ColorValue) {
        let names = match mode {
            Mode::Light => &mut self.light_names,
            Mode::Dark => &mut self.dark_names,
        };
        let identifier = names.allocate(rules, path);
        let entry = self
            .entries
            .entry(identifier.name().to_string())
            .or_insert_with(|| SemanticEntry {
                identifier,
                light: None,
                dark: None,
            });

        let slot = match mode {
            Mode::Light => &mut entry.light,
            Mode::Dark => &mut entry.dark,
        };
        if let Some(previous) = slot.replace(value) {
            debug!(
                "{mode}: `{}` declared more than once, replacing {:?}",
                entry.identifier, previous
            );
        }
    }

    pub fn get(&self, name: &str) -> Option<&SemanticEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SemanticEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(key: &str) -> TokenPath {
        TokenPath::from_key(key)
    }

    #[test]
    fn primitives_keep_source_order_and_identifiers() {
        let rules = NamingRules::default();
        let mut prims = PrimitiveRegistry::new();
        prims.insert(&rules, path("red.500"), Argb::opaque(0xD2, 0x0F, 0x39));
        prims.insert(&rules, path("blue.500"), Argb::opaque(0x00, 0x47, 0xAB));
        let again = prims
            .insert(&rules, path("red.500"), Argb::opaque(0xFF, 0x00, 0x00))
            .clone();

        let names: Vec<_> = prims.iter().map(|e| e.identifier.name()).collect();
        assert_eq!(names, vec!["Red500", "Blue500"]);
        assert_eq!(again.name(), "Red500");
        assert_eq!(prims.get("red.500").unwrap().color, Argb::opaque(0xFF, 0, 0));
    }

    #[test]
    fn light_only_entry_is_mode_invariant() {
        let rules = NamingRules::default();
        let mut sem = SemanticRegistry::new();
        let blue = Argb::opaque(0x00, 0x47, 0xAB);
        sem.record(&rules, Mode::Light, &path("text-default"), ColorValue::Literal(blue));

        let entry = sem.get("TextDefault").unwrap();
        assert_eq!(entry.light(), ColorValue::Literal(blue));
        assert_eq!(entry.dark(), ColorValue::Literal(blue));
        assert!(!entry.has_dark());
    }

    #[test]
    fn dark_only_entry_has_unspecified_light() {
        let rules = NamingRules::default();
        let mut sem = SemanticRegistry::new();
        sem.record(
            &rules,
            Mode::Dark,
            &path("glow"),
            ColorValue::Literal(Argb::WHITE),
        );

        let entry = sem.get("Glow").unwrap();
        assert_eq!(entry.light(), ColorValue::Unspecified);
        assert_eq!(entry.dark(), ColorValue::Literal(Argb::WHITE));
    }

    #[test]
    fn merge_keeps_first_seen_order_across_modes() {
        let rules = NamingRules::default();
        let mut sem = SemanticRegistry::new();
        sem.record(&rules, Mode::Light, &path("a"), ColorValue::Literal(Argb::BLACK));
        sem.record(&rules, Mode::Dark, &path("b"), ColorValue::Literal(Argb::WHITE));
        sem.record(&rules, Mode::Dark, &path("a"), ColorValue::Literal(Argb::WHITE));
        sem.record(&rules, Mode::Light, &path("c"), ColorValue::Literal(Argb::BLACK));

        let names: Vec<_> = sem.iter().map(|e| e.identifier.name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        let a = sem.get("A").unwrap();
        assert_eq!(a.value(Mode::Light), ColorValue::Literal(Argb::BLACK));
        assert_eq!(a.value(Mode::Dark), ColorValue::Literal(Argb::WHITE));
    }

    #[test]
    fn light_and_dark_paths_with_one_identifier_merge() {
        let rules = NamingRules {
            strip_prefixes: vec!["sem".into(), "light".into(), "dark".into()],
            ..NamingRules::default()
        };
        let mut sem = SemanticRegistry::new();
        sem.record(
            &rules,
            Mode::Light,
            &path("sem.light.text-default"),
            ColorValue::Literal(Argb::BLACK),
        );
        sem.record(
            &rules,
            Mode::Dark,
            &path("sem.dark.text-default"),
            ColorValue::Literal(Argb::WHITE),
        );

        assert_eq!(sem.len(), 1);
        let entry = sem.get("TextDefault").unwrap();
        assert_eq!(entry.light(), ColorValue::Literal(Argb::BLACK));
        assert_eq!(entry.dark(), ColorValue::Literal(Argb::WHITE));
    }

    #[test]
    fn same_mode_collisions_are_suffixed_consistently() {
        let rules = NamingRules {
            strip_prefixes: vec!["sem".into(), "light".into(), "dark".into()],
            ..NamingRules::default()
        };
        let mut sem = SemanticRegistry::new();
        sem.record(
            &rules,
            Mode::Light,
            &path("sem.light.surface"),
            ColorValue::Literal(Argb::WHITE),
        );
        sem.record(&rules, Mode::Light, &path("surface"), ColorValue::Literal(Argb::BLACK));
        sem.record(&rules, Mode::Dark, &path("sem.dark.surface"), ColorValue::Literal(Argb::BLACK));
        sem.record(&rules, Mode::Dark, &path("dark.surface"), ColorValue::Literal(Argb::WHITE));

        let names: Vec<_> = sem.iter().map(|e| e.identifier.name()).collect();
        assert_eq!(names, vec!["Surface", "Surface2"]);
        assert_eq!(sem.get("Surface").unwrap().dark(), ColorValue::Literal(Argb::BLACK));
        assert_eq!(sem.get("Surface2").unwrap().dark(), ColorValue::Literal(Argb::WHITE));
    }
}

//! Reference resolution from semantic tokens to primitive identifiers
//!
//! Lookups happen in dependency order: the primitive registry first, then the
//! pre-resolved brand layer. Anything that misses both falls back to the
//! token's literal value in the collector.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::naming::Identifier;
use crate::registry::{BrandRegistry, PrimitiveRegistry};
use crate::token::{TokenPath, TokenSet};

/// Pre-resolve the brand layer into brand path key -> primitive identifier.
///
/// Brand tokens may reference other brand tokens; chains are followed until
/// a primitive is reached. Brand tokens holding literals or references that
/// lead nowhere are left out and resolve through the literal fallback.
pub fn resolve_brands(brand: &TokenSet, primitives: &PrimitiveRegistry) -> BrandRegistry {
    let raw_by_key: FxHashMap<String, &str> = brand
        .colors()
        .filter_map(|t| Some((t.path.key(), t.raw.as_deref()?)))
        .collect();

    let mut registry = BrandRegistry::new();
    for token in brand.colors() {
        let key = token.path.key();
        match follow_brand_chain(&key, &raw_by_key, primitives) {
            Some(identifier) => registry.insert(key, identifier.clone()),
            None => debug!("brand: `{key}` does not lead to a primitive"),
        }
    }
    registry
}

fn follow_brand_chain<'p>(
    start: &str,
    raw_by_key: &FxHashMap<String, &str>,
    primitives: &'p PrimitiveRegistry,
) -> Option<&'p Identifier> {
    let mut seen = FxHashSet::default();
    let mut key = start.to_string();

    loop {
        if !seen.insert(key.clone()) {
            return None;
        }
        let raw = raw_by_key.get(&key)?;
        let target = TokenPath::from_reference(raw)?.key();
        if let Some(entry) = primitives.get(&target) {
            return Some(&entry.identifier);
        }
        key = target;
    }
}

/// Resolves brace references to primitive identifiers
#[derive(Clone, Copy)]
pub struct ReferenceResolver<'a> {
    primitives: &'a PrimitiveRegistry,
    brands: &'a BrandRegistry,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(primitives: &'a PrimitiveRegistry, brands: &'a BrandRegistry) -> Self {
        Self { primitives, brands }
    }

    /// The primitive a raw value denotes, `None` for literals and for
    /// references that neither layer knows
    pub fn resolve(&self, raw: &str) -> Option<&'a Identifier> {
        let key = TokenPath::from_reference(raw)?.key();
        self.primitives
            .get(&key)
            .map(|entry| &entry.identifier)
            .or_else(|| self.brands.get(&key))
    }
}

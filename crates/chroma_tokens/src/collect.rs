//! Token collection
//!
//! Walks the layers in dependency order and builds the registries:
//!
//! 1. primitives: every color literal gets a constant
//! 2. brand: pre-resolved to primitive identifiers
//! 3. light, then dark: semantic tokens become primitive references, or
//!    literals when no primitive is found
//!
//! Nothing here is fatal. Tokens that cannot be resolved are skipped and
//! logged, and each mode pass runs to completion independently.

use chroma_core::parse_color;
use tracing::{debug, info};

use crate::naming::NamingRules;
use crate::registry::{BrandRegistry, ColorValue, PrimitiveRegistry, SemanticRegistry};
use crate::resolve::{resolve_brands, ReferenceResolver};
use crate::token::{Mode, TokenLayers, TokenSet};
use crate::value::LiteralResolver;

/// Everything the emitters need, built fresh for each run
#[derive(Clone, Debug, Default)]
pub struct TokenRegistries {
    pub primitives: PrimitiveRegistry,
    pub brands: BrandRegistry,
    pub semantics: SemanticRegistry,
}

/// Run the collection pass over all layers
pub fn collect(layers: &TokenLayers, rules: &NamingRules) -> TokenRegistries {
    let primitives = collect_primitives(&layers.primitives, rules);
    let brands = match &layers.brand {
        Some(brand) => resolve_brands(brand, &primitives),
        None => BrandRegistry::new(),
    };

    let mut semantics = SemanticRegistry::new();
    let passes = [
        (Mode::Light, Some(&layers.light)),
        (Mode::Dark, layers.dark.as_ref()),
    ];
    for (mode, set) in passes {
        let Some(set) = set else {
            debug!("{mode}: no token set, skipping pass");
            continue;
        };
        let stack = [Some(&layers.primitives), layers.brand.as_ref(), Some(set)];
        let literals = LiteralResolver::new(stack.into_iter().flatten());
        let references = ReferenceResolver::new(&primitives, &brands);
        collect_mode(mode, set, &literals, references, rules, &mut semantics);
    }

    info!(
        "Collected {} primitives, {} brand aliases, {} semantic colors",
        primitives.len(),
        brands.len(),
        semantics.len()
    );

    TokenRegistries {
        primitives,
        brands,
        semantics,
    }
}

/// Build the primitive registry. Primitives that alias other primitives are
/// registered with the aliased literal.
pub fn collect_primitives(set: &TokenSet, rules: &NamingRules) -> PrimitiveRegistry {
    let literals = LiteralResolver::new([set]);
    let mut registry = PrimitiveRegistry::new();

    for resolved in literals.resolve_set(set, "primitives") {
        let path = &resolved.token.path;
        match resolved.resolved.as_deref().and_then(parse_color) {
            Some(color) => {
                registry.insert(rules, path.clone(), color);
            }
            None => debug!("primitives: `{path}` is not a color literal, skipping"),
        }
    }
    registry
}

fn collect_mode(
    mode: Mode,
    set: &TokenSet,
    literals: &LiteralResolver<'_>,
    references: ReferenceResolver<'_>,
    rules: &NamingRules,
    semantics: &mut SemanticRegistry,
) {
    let mut recorded = 0usize;
    for resolved in literals.resolve_set(set, &mode.to_string()) {
        let token = resolved.token;
        if rules.is_excluded_state(&token.path) {
            continue;
        }

        let raw = token.raw.as_deref().unwrap_or_default();
        let value = match references.resolve(raw) {
            Some(identifier) => ColorValue::Primitive(identifier.clone()),
            None => match resolved.resolved.as_deref().and_then(parse_color) {
                Some(color) => ColorValue::Literal(color),
                None => {
                    debug!("{mode}: `{}` has no color value, skipping", token.path);
                    continue;
                }
            },
        };

        semantics.record(rules, mode, &token.path, value);
        recorded += 1;
    }
    debug!("{mode}: recorded {recorded} semantic colors");
}

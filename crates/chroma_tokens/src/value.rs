//! Literal resolution of brace references
//!
//! A mode pass sees a stack of layers (primitives, brand, one mode set).
//! Every raw value is followed through `{...}` references until a literal
//! is reached. Later layers shadow earlier ones on identical paths.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::warn;

use crate::error::ReferenceError;
use crate::token::{Token, TokenPath, TokenSet};

/// A token together with its literal value after reference resolution
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedToken<'a> {
    pub token: &'a Token,
    /// `None` when the raw value is a broken or cyclic reference
    pub resolved: Option<String>,
}

/// Resolves brace references against a stack of token layers
pub struct LiteralResolver<'a> {
    by_key: FxHashMap<String, &'a Token>,
}

impl<'a> LiteralResolver<'a> {
    pub fn new<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = &'a TokenSet>,
    {
        let mut by_key = FxHashMap::default();
        for layer in layers {
            for token in layer {
                by_key.insert(token.path.key(), token);
            }
        }
        Self { by_key }
    }

    /// Look up a token by canonical path key
    pub fn get(&self, key: &str) -> Option<&'a Token> {
        self.by_key.get(key).copied()
    }

    /// Follow references in `raw` until a literal is reached
    pub fn resolve(&self, raw: &str) -> Result<String, ReferenceError> {
        let mut seen = FxHashSet::default();
        let mut current = raw.trim().to_string();

        while let Some(path) = TokenPath::from_reference(&current) {
            let key = path.key();
            if !seen.insert(key.clone()) {
                return Err(ReferenceError::Cycle { reference: key });
            }
            let token = self
                .get(&key)
                .ok_or_else(|| ReferenceError::Broken { reference: key.clone() })?;
            current = token
                .raw
                .as_deref()
                .map(str::trim)
                .filter(|raw| !raw.is_empty())
                .ok_or(ReferenceError::Empty { reference: key })?
                .to_string();
        }

        Ok(current)
    }

    /// Resolve every color token of `set`. Broken references are logged and
    /// leave the token unresolved; the pass always completes.
    pub fn resolve_set(&self, set: &'a TokenSet, layer: &str) -> Vec<ResolvedToken<'a>> {
        set.colors()
            .map(|token| {
                let raw = token.raw.as_deref().unwrap_or_default();
                let resolved = match self.resolve(raw) {
                    Ok(value) => Some(value),
                    Err(err) => {
                        warn!("{layer}: token `{}`: {err}", token.path);
                        None
                    }
                };
                ResolvedToken { token, resolved }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(entries: &[(&str, &str)]) -> TokenSet {
        entries
            .iter()
            .map(|(key, raw)| Token::color(TokenPath::from_key(key), *raw))
            .collect()
    }

    #[test]
    fn literals_resolve_to_themselves() {
        let prims = set(&[("blue.500", "#0047AB")]);
        let resolver = LiteralResolver::new([&prims]);
        assert_eq!(resolver.resolve(" #0047AB ").unwrap(), "#0047AB");
    }

    #[test]
    fn reference_chains_cross_layers() {
        let prims = set(&[("blue.500", "#0047AB")]);
        let brand = set(&[("brand.primary", "{blue.500}")]);
        let light = set(&[("text.link", "{brand.primary}")]);
        let resolver = LiteralResolver::new([&prims, &brand, &light]);

        assert_eq!(resolver.resolve("{text.link}").unwrap(), "#0047AB");
        let resolved = resolver.resolve_set(&light, "light");
        assert_eq!(resolved[0].resolved.as_deref(), Some("#0047AB"));
    }

    #[test]
    fn broken_and_cyclic_references_are_reported() {
        let light = set(&[("a", "{b}"), ("b", "{a}"), ("c", "{missing.token}")]);
        let resolver = LiteralResolver::new([&light]);

        assert_eq!(
            resolver.resolve("{a}"),
            Err(ReferenceError::Cycle {
                reference: "a".to_string()
            })
        );
        assert_eq!(
            resolver.resolve("{c}"),
            Err(ReferenceError::Broken {
                reference: "missing.token".to_string()
            })
        );

        let resolved = resolver.resolve_set(&light, "light");
        assert_eq!(resolved.len(), 3);
        assert!(resolved.iter().all(|r| r.resolved.is_none()));
    }

    #[test]
    fn later_layers_shadow_earlier_ones() {
        let prims = set(&[("accent", "#000000")]);
        let dark = set(&[("accent", "#FFFFFF")]);
        let resolver = LiteralResolver::new([&prims, &dark]);
        assert_eq!(resolver.resolve("{accent}").unwrap(), "#FFFFFF");
    }
}

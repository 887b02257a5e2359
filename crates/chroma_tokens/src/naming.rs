//! Identifier normalization
//!
//! Turns a token path into a symbol name:
//!
//! 1. leading namespace segments listed in `strip_prefixes` are dropped
//! 2. the remaining segments are split into words on any character that is
//!    not a letter or digit (`-`, `_`, spaces, `/`, `%`, ...)
//! 3. words listed in `vocabulary` are replaced by their correction
//! 4. words are joined in PascalCase or camelCase
//!
//! `wel.prim.color.blue-500` with prefixes `[wel, prim, color]` becomes
//! `Blue500`.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::token::TokenPath;

/// Case convention for generated identifiers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    #[default]
    Pascal,
    Camel,
}

/// Naming configuration, usually read from the `[naming]` table
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NamingRules {
    /// Organizational namespace segments removed from the front of a path
    pub strip_prefixes: Vec<String>,
    pub case: Case,
    /// Prepended when an identifier would start with a digit
    pub numeric_prefix: String,
    /// Word replacements, matched case-insensitively against whole words
    pub vocabulary: IndexMap<String, String>,
    /// Path words marking interaction-state variants excluded from semantics
    pub exclude_states: Vec<String>,
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            strip_prefixes: Vec::new(),
            case: Case::Pascal,
            numeric_prefix: "C".to_string(),
            vocabulary: IndexMap::new(),
            exclude_states: vec!["hover".to_string(), "pressed".to_string()],
        }
    }
}

impl NamingRules {
    /// Derive the identifier for a token path
    pub fn identifier(&self, path: &TokenPath) -> Identifier {
        let segments = self.strip(path.segments());

        let mut words: Vec<String> = Vec::new();
        for word in segments.iter().flat_map(|s| split_words(s)) {
            match self.correction(word) {
                Some(corrected) => words.extend(split_words(corrected).map(str::to_string)),
                None => words.push(word.to_string()),
            }
        }

        if let Some(first) = words.first_mut() {
            if first.starts_with(|c: char| c.is_ascii_digit()) {
                *first = format!("{}{}", self.numeric_prefix, first);
            }
        }

        Identifier::from_words(words, self.case)
    }

    /// Whether the path names a hover/pressed style state variant
    pub fn is_excluded_state(&self, path: &TokenPath) -> bool {
        path.segments()
            .iter()
            .flat_map(|s| split_words(s))
            .any(|word| {
                self.exclude_states
                    .iter()
                    .any(|state| state.eq_ignore_ascii_case(word))
            })
    }

    fn strip<'p>(&self, segments: &'p [String]) -> &'p [String] {
        let mut start = 0;
        while start < segments.len()
            && self
                .strip_prefixes
                .iter()
                .any(|p| p.eq_ignore_ascii_case(&segments[start]))
        {
            start += 1;
        }

        // Never strip a path down to nothing
        if start == segments.len() && !segments.is_empty() {
            start = segments.len() - 1;
        }
        &segments[start..]
    }

    fn correction(&self, word: &str) -> Option<&str> {
        self.vocabulary
            .iter()
            .find(|(from, _)| from.eq_ignore_ascii_case(word))
            .map(|(_, to)| to.as_str())
    }
}

/// Words are runs of letters and digits; everything else separates them so
/// it never reaches a generated symbol
fn split_words(segment: &str) -> impl Iterator<Item = &str> {
    segment
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split a word on lower-to-upper case humps: `ExtraLight` -> `Extra`, `Light`
fn humps(word: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut prev_lower = false;
    for (i, c) in word.char_indices() {
        if c.is_uppercase() && prev_lower {
            parts.push(&word[start..i]);
            start = i;
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
    }
    parts.push(&word[start..]);
    parts
}

/// A generated symbol name along with the words it was built from
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    words: Vec<String>,
    name: String,
}

impl Identifier {
    pub fn from_words(words: Vec<String>, case: Case) -> Self {
        let name = words
            .iter()
            .enumerate()
            .map(|(i, w)| match (case, i) {
                (Case::Camel, 0) => lower_first(w),
                _ => upper_first(w),
            })
            .collect();
        Self { words, name }
    }

    /// Name in the configured case
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// `SCREAMING_SNAKE_CASE` rendering, for constants
    pub fn to_screaming_snake(&self) -> String {
        self.snake_parts()
            .iter()
            .map(|p| p.to_uppercase())
            .collect::<Vec<_>>()
            .join("_")
    }

    /// `snake_case` rendering, for functions
    pub fn to_snake(&self) -> String {
        self.snake_parts()
            .iter()
            .map(|p| p.to_lowercase())
            .collect::<Vec<_>>()
            .join("_")
    }

    fn snake_parts(&self) -> Vec<&str> {
        self.words.iter().flat_map(|w| humps(w)).collect()
    }

    fn with_suffix(&self, n: usize) -> Self {
        let mut words = self.words.clone();
        let last = words.pop().unwrap_or_default();
        words.push(format!("{last}{n}"));
        // The rendered name only gains a suffix; casing of the rest is kept
        Self {
            words,
            name: format!("{}{n}", self.name),
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Hands out unique names within one generated document.
///
/// The same path key always gets the same identifier back; a different path
/// that normalizes to a taken name gets the smallest free numeric suffix.
#[derive(Clone, Debug, Default)]
pub struct IdentifierAllocator {
    by_path: FxHashMap<String, Identifier>,
    owners: FxHashMap<String, String>,
}

impl IdentifierAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, rules: &NamingRules, path: &TokenPath) -> Identifier {
        let key = path.key();
        if let Some(existing) = self.by_path.get(&key) {
            return existing.clone();
        }

        let base = rules.identifier(path);
        let mut ident = base.clone();
        let mut n = 2;
        while self.owners.contains_key(ident.name()) {
            ident = base.with_suffix(n);
            n += 1;
        }
        if ident.name() != base.name() {
            warn!(
                "Identifier `{}` for `{}` collides with `{}`; using `{}`",
                base,
                key,
                self.owners[base.name()],
                ident
            );
        }

        self.owners.insert(ident.name().to_string(), key.clone());
        self.by_path.insert(key, ident.clone());
        ident
    }
}

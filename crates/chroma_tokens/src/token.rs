//! Token records and layers

use std::fmt;

/// Hierarchical token path, e.g. `wel.prim.color.blue.500`
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenPath(Vec<String>);

impl TokenPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parse a dotted key like `wel.prim.color.blue.500`
    pub fn from_key(key: &str) -> Self {
        Self::new(key.split('.').map(str::trim).filter(|s| !s.is_empty()))
    }

    /// Parse the inside of a brace reference, `None` if `raw` is not one
    pub fn from_reference(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let inner = raw.strip_prefix('{')?.strip_suffix('}')?;
        let path = Self::from_key(inner);
        (!path.is_empty()).then_some(path)
    }

    /// Canonical lookup key: segments joined with `.`
    pub fn key(&self) -> String {
        self.0.join(".")
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Declared token kind (`type` / `$type`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Color,
    Other(String),
}

impl TokenKind {
    pub fn parse(kind: &str) -> Self {
        if kind.trim().eq_ignore_ascii_case("color") {
            Self::Color
        } else {
            Self::Other(kind.trim().to_string())
        }
    }
}

/// A single design token as loaded from a token document
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub path: TokenPath,
    pub kind: Option<TokenKind>,
    /// Literal expression or brace reference; `None` for composite values
    pub raw: Option<String>,
}

impl Token {
    pub fn color(path: TokenPath, raw: impl Into<String>) -> Self {
        Self {
            path,
            kind: Some(TokenKind::Color),
            raw: Some(raw.into()),
        }
    }

    /// Color tokens with a usable value; everything else is filtered out
    /// before collection
    pub fn is_color(&self) -> bool {
        matches!(self.kind, Some(TokenKind::Color))
            && self.raw.as_deref().is_some_and(|raw| !raw.trim().is_empty())
    }
}

/// Ordered tokens of one layer
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenSet {
    tokens: Vec<Token>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn extend(&mut self, other: TokenSet) {
        self.tokens.extend(other.tokens);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Color tokens only
    pub fn colors(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_color())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<Token> for TokenSet {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Light or dark variant of the semantic layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Light,
    Dark,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        })
    }
}

/// Every layer of one invocation, in dependency order
#[derive(Clone, Debug, Default)]
pub struct TokenLayers {
    pub primitives: TokenSet,
    pub brand: Option<TokenSet>,
    pub light: TokenSet,
    pub dark: Option<TokenSet>,
}

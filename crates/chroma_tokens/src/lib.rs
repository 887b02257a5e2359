//! Chroma Tokens
//!
//! Turns layered color design tokens into source code for a UI framework.
//!
//! # Overview
//!
//! Token layers are processed in dependency order:
//!
//! - **Primitives**: literal palette colors (`blue-500 = #0047AB`)
//! - **Brand**: aliases from brand names onto primitives
//! - **Light / Dark**: semantic assignments (`text-default = {blue-500}`)
//!
//! The pipeline has two stages. [`collect()`] builds the registries (primitive
//! identifiers and merged light/dark semantic values), and an [`Emitter`]
//! renders them as a primitives document and a semantics document.
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_tokens::{
//!     emitter_for, generate, EmitOptions, NamingRules, Target, Token, TokenLayers, TokenPath,
//!     TokenSet,
//! };
//!
//! let layers = TokenLayers {
//!     primitives: TokenSet::from_iter([Token::color(TokenPath::from_key("blue-500"), "#0047AB")]),
//!     brand: None,
//!     light: TokenSet::from_iter([Token::color(TokenPath::from_key("text-default"), "{blue-500}")]),
//!     dark: None,
//! };
//!
//! let emitter = emitter_for(Target::Compose, EmitOptions::default());
//! let docs = generate(&layers, &NamingRules::default(), emitter.as_ref());
//! assert!(docs.semantics.contents.contains("val TextDefault: Color"));
//! ```

mod collect;
mod error;
mod load;
mod naming;
mod registry;
mod resolve;
mod token;
mod value;

pub mod emit;

pub use collect::{collect, collect_primitives, TokenRegistries};
pub use emit::{
    emitter_for, EmitOptions, EmittedDocument, Emitter, GeneratedDocuments, Target,
    GENERATED_HEADER,
};
pub use error::{ReferenceError, TokenError};
pub use load::{load_file, load_layer, parse_document, Format};
pub use naming::{Case, Identifier, IdentifierAllocator, NamingRules};
pub use registry::{
    BrandRegistry, ColorValue, PrimitiveEntry, PrimitiveRegistry, SemanticEntry, SemanticRegistry,
};
pub use resolve::{resolve_brands, ReferenceResolver};
pub use token::{Mode, Token, TokenKind, TokenLayers, TokenPath, TokenSet};
pub use value::{LiteralResolver, ResolvedToken};

/// Collect `layers` and render them with `emitter`
pub fn generate(
    layers: &TokenLayers,
    rules: &NamingRules,
    emitter: &dyn Emitter,
) -> GeneratedDocuments {
    let registries = collect(layers, rules);
    emitter.emit(&registries)
}

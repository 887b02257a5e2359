//! Source emitters
//!
//! Each target framework renders the registries into two documents:
//! - **primitives**: one immutable constant per primitive color
//! - **semantics**: one accessor per semantic color, choosing the light or
//!   dark value through the framework's own theme detection

mod blinc;
mod compose;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::collect::TokenRegistries;
use crate::registry::{PrimitiveRegistry, SemanticRegistry};

pub use blinc::BlincEmitter;
pub use compose::ComposeEmitter;

/// First line of every generated document
pub const GENERATED_HEADER: &str = "Generated by chroma from design tokens. Do not edit.";

/// Supported output frameworks
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Jetpack Compose (Kotlin)
    #[default]
    Compose,
    /// Blinc UI (Rust)
    Blinc,
}

impl Target {
    /// Stable id for config files and the command line
    pub fn id(self) -> &'static str {
        match self {
            Self::Compose => "compose",
            Self::Blinc => "blinc",
        }
    }

    pub fn all() -> &'static [Target] {
        const TARGETS: [Target; 2] = [Target::Compose, Target::Blinc];
        &TARGETS
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::all()
            .iter()
            .copied()
            .find(|t| t.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let ids: Vec<_> = Target::all().iter().map(|t| t.id()).collect();
                format!("unknown target `{s}` (expected one of: {})", ids.join(", "))
            })
    }
}

/// Names used in the generated documents
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitOptions {
    /// Kotlin package / unused for Rust targets
    pub package: Option<String>,
    pub primitives_name: String,
    pub semantics_name: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            package: None,
            primitives_name: "Primitives".to_string(),
            semantics_name: "Semantics".to_string(),
        }
    }
}

/// One generated source file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmittedDocument {
    pub file_name: String,
    pub contents: String,
}

/// The pair of documents produced by one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedDocuments {
    pub primitives: EmittedDocument,
    pub semantics: EmittedDocument,
}

impl GeneratedDocuments {
    pub fn iter(&self) -> impl Iterator<Item = &EmittedDocument> {
        [&self.primitives, &self.semantics].into_iter()
    }
}

/// Renders registries for one target framework
pub trait Emitter {
    fn target(&self) -> Target;

    fn primitives(&self, registry: &PrimitiveRegistry) -> EmittedDocument;

    fn semantics(&self, registry: &SemanticRegistry) -> EmittedDocument;

    fn emit(&self, registries: &TokenRegistries) -> GeneratedDocuments {
        GeneratedDocuments {
            primitives: self.primitives(&registries.primitives),
            semantics: self.semantics(&registries.semantics),
        }
    }
}

/// Build the emitter for `target`
pub fn emitter_for(target: Target, options: EmitOptions) -> Box<dyn Emitter> {
    match target {
        Target::Compose => Box::new(ComposeEmitter::new(options)),
        Target::Blinc => Box::new(BlincEmitter::new(options)),
    }
}

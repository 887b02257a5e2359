//! `generate` and `check` commands

use anyhow::{Context, Result};
use chroma_tokens::{
    emitter_for, generate, load_layer, GeneratedDocuments, Target, TokenLayers, TokenSet,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::ChromaConfig;

/// Command-line overrides for the `[output]` table
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub out_dir: Option<PathBuf>,
    pub target: Option<Target>,
}

/// Load every configured layer.
///
/// Primitives and light tokens are required. Brand and dark layers are
/// optional: when configured but unreadable, the run continues without them.
pub fn load_layers(config: &ChromaConfig) -> Result<TokenLayers> {
    let primitives = config.resolve(&config.input.primitives);
    let light = config.resolve(&config.input.light);

    Ok(TokenLayers {
        primitives: load_layer(&primitives)
            .with_context(|| format!("Failed to load primitives from {}", primitives.display()))?,
        brand: load_optional("brand", config, config.input.brand.as_deref()),
        light: load_layer(&light)
            .with_context(|| format!("Failed to load light tokens from {}", light.display()))?,
        dark: load_optional("dark", config, config.input.dark.as_deref()),
    })
}

fn load_optional(layer: &str, config: &ChromaConfig, path: Option<&Path>) -> Option<TokenSet> {
    let path = config.resolve(path?);
    match load_layer(&path) {
        Ok(set) => Some(set),
        Err(err) => {
            warn!("Skipping {layer} layer: {err}");
            None
        }
    }
}

/// Run the pipeline without touching the output directory
pub fn render(
    config: &ChromaConfig,
    overrides: &Overrides,
) -> Result<(PathBuf, GeneratedDocuments)> {
    let layers = load_layers(config)?;
    let target = overrides.target.unwrap_or(config.output.target);
    let out_dir = overrides
        .out_dir
        .clone()
        .unwrap_or_else(|| config.output_dir());

    let emitter = emitter_for(target, config.emit_options());
    let docs = generate(&layers, &config.naming, emitter.as_ref());
    Ok((out_dir, docs))
}

/// Generate and write both documents, returning the written paths
pub fn write_documents(config: &ChromaConfig, overrides: &Overrides) -> Result<Vec<PathBuf>> {
    let (out_dir, docs) = render(config, overrides)?;
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut written = Vec::new();
    for doc in docs.iter() {
        let path = out_dir.join(&doc.file_name);
        fs::write(&path, &doc.contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Paths whose contents differ from what would be generated
pub fn stale_documents(config: &ChromaConfig, overrides: &Overrides) -> Result<Vec<PathBuf>> {
    let (out_dir, docs) = render(config, overrides)?;

    let mut stale = Vec::new();
    for doc in docs.iter() {
        let path = out_dir.join(&doc.file_name);
        match fs::read_to_string(&path) {
            Ok(current) if current == doc.contents => {}
            Ok(_) => {
                warn!("{} is out of date", path.display());
                stale.push(path);
            }
            Err(_) => {
                warn!("{} is missing", path.display());
                stale.push(path);
            }
        }
    }
    Ok(stale)
}

//! Project scaffolding for `chroma init`

use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::config::{ChromaConfig, CONFIG_FILE};

/// Create chroma.toml and starter token files under `path`
pub fn create_project(path: &Path, name: &str, force: bool) -> Result<()> {
    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite it.",
            config_path.display()
        );
    }

    let tokens = path.join("tokens");
    fs::create_dir_all(&tokens)
        .with_context(|| format!("Failed to create {}", tokens.display()))?;

    let config = ChromaConfig::new(name);
    fs::write(&config_path, config.to_toml()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    let prefix = name.to_ascii_lowercase();
    write_tokens(&tokens.join("primitives.json"), &primitives_template(&prefix))?;
    write_tokens(
        &tokens.join("light.json"),
        &semantics_template(&prefix, "gray.900", "gray.50", "blue.500"),
    )?;
    write_tokens(
        &tokens.join("dark.json"),
        &semantics_template(&prefix, "gray.50", "gray.900", "blue.300"),
    )?;

    Ok(())
}

fn write_tokens(path: &Path, doc: &serde_json::Value) -> Result<()> {
    if path.exists() {
        tracing::debug!("Keeping existing {}", path.display());
        return Ok(());
    }
    let text = serde_json::to_string_pretty(doc).context("Failed to serialize tokens")?;
    fs::write(path, text + "\n").with_context(|| format!("Failed to write {}", path.display()))
}

fn primitives_template(prefix: &str) -> serde_json::Value {
    json!({
        prefix: {
            "prim": {
                "color": {
                    "$type": "color",
                    "gray": {
                        "50": { "$value": "#F8F9FA" },
                        "900": { "$value": "#121417" }
                    },
                    "blue": {
                        "300": { "$value": "#6B9BE0" },
                        "500": { "$value": "#0047AB" }
                    }
                }
            }
        }
    })
}

fn semantics_template(prefix: &str, text: &str, surface: &str, accent: &str) -> serde_json::Value {
    let reference = |path: &str| format!("{{{prefix}.prim.color.{path}}}");
    json!({
        prefix: {
            "sem": {
                "color": {
                    "$type": "color",
                    "text-default": { "$value": reference(text) },
                    "surface": { "$value": reference(surface) },
                    "accent": { "$value": reference(accent) },
                    "accent-hover": { "$value": reference(accent) }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_tokens::load_layer;

    #[test]
    fn init_writes_loadable_project() {
        let dir = tempfile::tempdir().unwrap();
        create_project(dir.path(), "Wel", false).unwrap();

        let config = ChromaConfig::load(dir.path()).unwrap();
        assert_eq!(config.project.name, "Wel");

        let prims = load_layer(&config.resolve(&config.input.primitives)).unwrap();
        assert_eq!(prims.colors().count(), 4);

        let light = load_layer(&config.resolve(&config.input.light)).unwrap();
        let first = light.iter().next().unwrap();
        assert_eq!(first.path.key(), "wel.sem.color.text-default");
        assert_eq!(first.raw.as_deref(), Some("{wel.prim.color.gray.900}"));
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        create_project(dir.path(), "wel", false).unwrap();

        let err = create_project(dir.path(), "wel", false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        create_project(dir.path(), "wel", true).unwrap();
    }
}

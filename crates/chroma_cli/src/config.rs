//! Chroma configuration file handling

use anyhow::{Context, Result};
use chroma_tokens::{Case, EmitOptions, Identifier, NamingRules, Target};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "chroma.toml";

/// Top-level Chroma configuration (chroma.toml)
#[derive(Debug, Deserialize, Serialize)]
pub struct ChromaConfig {
    pub project: ProjectConfig,
    pub input: InputConfig,
    #[serde(default)]
    pub naming: NamingRules,
    #[serde(default)]
    pub output: OutputConfig,

    /// Directory relative input and output paths are resolved against
    #[serde(skip)]
    root: PathBuf,
}

/// Project metadata
#[derive(Debug, Deserialize, Serialize)]
pub struct ProjectConfig {
    pub name: String,
}

/// Token layer locations; each may be a file or a directory of token files
#[derive(Debug, Deserialize, Serialize)]
pub struct InputConfig {
    pub primitives: PathBuf,
    #[serde(default)]
    pub brand: Option<PathBuf>,
    pub light: PathBuf,
    #[serde(default)]
    pub dark: Option<PathBuf>,
}

/// Generated source configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Output directory
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default)]
    pub target: Target,
    /// Kotlin package for the Compose target
    #[serde(default)]
    pub package: Option<String>,
    /// Defaults to `<Project>Primitives`
    #[serde(default)]
    pub primitives_name: Option<String>,
    /// Defaults to `<Project>Semantics`
    #[serde(default)]
    pub semantics_name: Option<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("generated")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            target: Target::default(),
            package: None,
            primitives_name: None,
            semantics_name: None,
        }
    }
}

impl ChromaConfig {
    /// Load configuration from a file or a directory (looks for chroma.toml)
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found at {}. Run `chroma init` to create one.",
                CONFIG_FILE,
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let mut config: ChromaConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(config)
    }

    /// Create a starter configuration for the given project name
    pub fn new(name: &str) -> Self {
        let prefix = name.to_ascii_lowercase();
        Self {
            project: ProjectConfig {
                name: name.to_string(),
            },
            input: InputConfig {
                primitives: PathBuf::from("tokens/primitives.json"),
                brand: None,
                light: PathBuf::from("tokens/light.json"),
                dark: Some(PathBuf::from("tokens/dark.json")),
            },
            naming: NamingRules {
                strip_prefixes: vec![
                    prefix,
                    "prim".to_string(),
                    "sem".to_string(),
                    "color".to_string(),
                ],
                ..NamingRules::default()
            },
            output: OutputConfig::default(),
            root: PathBuf::new(),
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Resolve a configured path against the config file's directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.output.dir)
    }

    /// Object names and package for the emitters
    pub fn emit_options(&self) -> EmitOptions {
        let project = Identifier::from_words(
            self.project
                .name
                .split(|c: char| !c.is_ascii_alphanumeric())
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect(),
            Case::Pascal,
        );

        EmitOptions {
            package: self.output.package.clone(),
            primitives_name: self
                .output
                .primitives_name
                .clone()
                .unwrap_or_else(|| format!("{project}Primitives")),
            semantics_name: self
                .output
                .semantics_name
                .clone()
                .unwrap_or_else(|| format!("{project}Semantics")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: ChromaConfig = toml::from_str(
            r#"
[project]
name = "wel"

[input]
primitives = "tokens/primitives.json"
light = "tokens/light.json"
"#,
        )
        .unwrap();

        assert_eq!(config.input.brand, None);
        assert_eq!(config.input.dark, None);
        assert_eq!(config.output.dir, PathBuf::from("generated"));
        assert_eq!(config.output.target, Target::Compose);
        assert_eq!(config.naming, NamingRules::default());

        let options = config.emit_options();
        assert_eq!(options.primitives_name, "WelPrimitives");
        assert_eq!(options.semantics_name, "WelSemantics");
        assert_eq!(options.package, None);
    }

    #[test]
    fn full_config_parses() {
        let config: ChromaConfig = toml::from_str(
            r#"
[project]
name = "wel-design"

[input]
primitives = "tokens/primitives"
brand = "tokens/brand.json"
light = "tokens/light.json"
dark = "tokens/dark.json"

[naming]
strip_prefixes = ["wel", "prim"]
case = "camel"
numeric_prefix = "N"
exclude_states = ["hover", "pressed", "focus"]

[naming.vocabulary]
xlight = "ExtraLight"

[output]
dir = "app/src/main/java/com/wel/theme"
target = "blinc"
package = "com.wel.theme"
semantics_name = "WelColors"
"#,
        )
        .unwrap();

        assert_eq!(config.naming.case, Case::Camel);
        assert_eq!(config.naming.numeric_prefix, "N");
        assert_eq!(config.naming.exclude_states.len(), 3);
        assert_eq!(config.output.target, Target::Blinc);

        let options = config.emit_options();
        assert_eq!(options.primitives_name, "WelDesignPrimitives");
        assert_eq!(options.semantics_name, "WelColors");
        assert_eq!(options.package.as_deref(), Some("com.wel.theme"));
    }

    #[test]
    fn starter_config_round_trips() {
        let config = ChromaConfig::new("Wel");
        let text = config.to_toml().unwrap();
        let parsed: ChromaConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed.project.name, "Wel");
        assert_eq!(parsed.input.dark, Some(PathBuf::from("tokens/dark.json")));
        assert_eq!(parsed.naming, config.naming);
    }

    #[test]
    fn relative_paths_resolve_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            ChromaConfig::new("wel").to_toml().unwrap(),
        )
        .unwrap();

        let config = ChromaConfig::load(dir.path()).unwrap();
        assert_eq!(config.output_dir(), dir.path().join("generated"));
        assert_eq!(
            config.resolve(&config.input.primitives),
            dir.path().join("tokens/primitives.json")
        );
    }

    #[test]
    fn missing_config_suggests_init() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChromaConfig::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("chroma init"));
    }
}

//! Token document loading
//!
//! Token documents are nested mappings (JSON or YAML). A mapping with a
//! `value`/`$value` key is a token; any other mapping is a group whose key
//! becomes a path segment. Group keys starting with `$` are metadata, except
//! `$type`, which is inherited by tokens below the group.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::TokenError;
use crate::token::{Token, TokenKind, TokenPath, TokenSet};

/// Token document syntax
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Load one layer from a token file or a directory of token files.
///
/// Directory entries are visited in file-name order so the token order (and
/// therefore the generated output) is stable across platforms.
pub fn load_layer(path: &Path) -> Result<TokenSet, TokenError> {
    if !path.is_dir() {
        return load_file(path);
    }

    let mut set = TokenSet::new();
    let mut files = 0usize;
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(|source| TokenError::Walk {
            path: path.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() || Format::from_path(entry.path()).is_none() {
            continue;
        }
        set.extend(load_file(entry.path())?);
        files += 1;
    }

    if files == 0 {
        return Err(TokenError::EmptyLayer(path.to_path_buf()));
    }
    debug!("Loaded {} tokens from {} files under {}", set.len(), files, path.display());
    Ok(set)
}

/// Load a single token file
pub fn load_file(path: &Path) -> Result<TokenSet, TokenError> {
    let format =
        Format::from_path(path).ok_or_else(|| TokenError::UnsupportedFormat(path.to_path_buf()))?;
    let src = fs::read_to_string(path).map_err(|source| TokenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&src, format, &path.display().to_string())
}

/// Parse a token document held in memory. `origin` names the document in
/// error messages.
pub fn parse_document(src: &str, format: Format, origin: &str) -> Result<TokenSet, TokenError> {
    let root: Value = match format {
        Format::Json => serde_json::from_str(src).map_err(|source| TokenError::Json {
            origin: origin.to_string(),
            source,
        })?,
        Format::Yaml => serde_yaml::from_str(src).map_err(|source| TokenError::Yaml {
            origin: origin.to_string(),
            source,
        })?,
    };

    let root = match root {
        Value::Object(map) => map,
        // An empty YAML file
        Value::Null => Map::new(),
        _ => {
            return Err(TokenError::NotAMapping {
                origin: origin.to_string(),
            })
        }
    };

    let mut set = TokenSet::new();
    let mut path = Vec::new();
    flatten_group(&root, &mut path, None, &mut set);
    Ok(set)
}

fn token_value(map: &Map<String, Value>) -> Option<&Value> {
    map.get("$value").or_else(|| map.get("value"))
}

fn declared_kind(map: &Map<String, Value>) -> Option<&str> {
    map.get("$type")
        .or_else(|| map.get("type"))
        .and_then(Value::as_str)
}

fn flatten_group(
    group: &Map<String, Value>,
    path: &mut Vec<String>,
    inherited_kind: Option<&str>,
    out: &mut TokenSet,
) {
    let group_kind = group
        .get("$type")
        .and_then(Value::as_str)
        .or(inherited_kind);

    for (key, child) in group {
        if key.starts_with('$') {
            continue;
        }
        let Value::Object(child) = child else {
            // Loose scalars in a group (descriptions, comments) are not tokens
            continue;
        };

        path.push(key.clone());
        if let Some(value) = token_value(child) {
            let kind = declared_kind(child).or(group_kind);
            out.push(Token {
                path: TokenPath::new(path.iter().cloned()),
                kind: kind.map(TokenKind::parse),
                raw: raw_value(value),
            });
        } else {
            flatten_group(child, path, group_kind, out);
        }
        path.pop();
    }
}

fn raw_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        // Composite values (shadows, gradients, typography) are never colors
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

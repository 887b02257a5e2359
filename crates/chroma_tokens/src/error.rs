use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML in {origin}: {source}")]
    Yaml {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{origin}: token document root must be a mapping")]
    NotAMapping { origin: String },

    #[error("unsupported token file {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("no token files found under {}", .0.display())]
    EmptyLayer(PathBuf),
}

/// A brace reference that could not be turned into a literal value
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("reference `{{{reference}}}` does not name a token")]
    Broken { reference: String },

    #[error("reference `{{{reference}}}` is part of a cycle")]
    Cycle { reference: String },

    #[error("reference `{{{reference}}}` names a token without a value")]
    Empty { reference: String },
}

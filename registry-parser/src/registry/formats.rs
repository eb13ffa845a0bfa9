//! Output formats for configuration trees
//!
//! - `treeviz` - box-drawing tree view for humans
//! - `tag` - XML-like tags mirroring the tree structure
//! - `registry` - registry text, the inverse of lexing + parsing
//! - `json` / `yaml` - serde serializations

pub mod registry;
pub mod tag;
pub mod treeviz;

pub use registry::to_registry_string;
pub use tag::serialize_registry_tag;
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_width};

use crate::registry::ast::RegistryConf;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown format '{0}' (available: treeviz, tag, registry, json, yaml)")]
    Unknown(String),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Treeviz,
    Tag,
    Registry,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: &'static [OutputFormat] = &[
        OutputFormat::Treeviz,
        OutputFormat::Tag,
        OutputFormat::Registry,
        OutputFormat::Json,
        OutputFormat::Yaml,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Tag => "tag",
            OutputFormat::Registry => "registry",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .iter()
            .copied()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormatError::Unknown(s.to_string()))
    }
}

/// Render a tree in the given format. `label_width` only affects treeviz.
pub fn render<B>(
    conf: &RegistryConf<B>,
    format: OutputFormat,
    label_width: usize,
) -> Result<String, FormatError> {
    Ok(match format {
        OutputFormat::Treeviz => to_treeviz_str_with_width(conf, label_width),
        OutputFormat::Tag => serialize_registry_tag(conf),
        OutputFormat::Registry => to_registry_string(conf),
        OutputFormat::Json => serde_json::to_string_pretty(conf)?,
        OutputFormat::Yaml => serde_yaml::to_string(conf)?,
    })
}

//! Manifest parsing and validation

use anyhow::{Context, Result};
use ddb_mapper_codegen::CodegenOptions;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Default manifest file name
pub const DEFAULT_MANIFEST: &str = "ddb-mapper.toml";

/// ddb-mapper.toml manifest structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub codegen: CodegenOptions,

    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub sources: Vec<SourceEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Crate source root; generated modules are written below it.
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "src".to_string()
}

/// A source file to scan and the module it defines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub path: String,

    /// Module path of the file, e.g. `crate::model`
    pub module: String,
}

impl Manifest {
    /// Load manifest from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read manifest: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse manifest from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse manifest")
    }

    /// Validate the manifest
    pub fn validate(&self) -> Result<()> {
        if self.output.dir.is_empty() {
            anyhow::bail!("Output directory cannot be empty");
        }

        if self.sources.is_empty() {
            anyhow::bail!("Manifest lists no sources");
        }

        let mut seen = HashSet::new();
        for source in &self.sources {
            if source.path.is_empty() {
                anyhow::bail!("Source path cannot be empty");
            }

            if !seen.insert(source.path.as_str()) {
                anyhow::bail!("Source '{}' is listed more than once", source.path);
            }

            if !is_valid_module(&source.module) {
                anyhow::bail!(
                    "Invalid module '{}' for source '{}', expected a path like crate::model",
                    source.module,
                    source.path
                );
            }
        }

        Ok(())
    }
}

/// A `crate`-rooted module path of plain identifiers
fn is_valid_module(module: &str) -> bool {
    let mut segments = module.split("::");
    segments.next() == Some("crate") && segments.all(is_identifier)
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

//! Configuration for template compilation and TOML-defined template families

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::registry::TypeRegistry;
use crate::value::ValueKind;

/// Errors that can occur when loading a template family config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read template config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse template config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("unknown kind '{kind}' for tag '{tag}' (expected string, number, boolean, null or undefined)")]
    UnknownKind { tag: String, kind: String },
}

/// What to do when one placeholder name appears with tags of different kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail compilation with a conflicting-tags error
    #[default]
    Reject,
    /// Keep the first occurrence's tag
    FirstWins,
}

/// Options applied when compiling templates
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CompileConfig {
    /// Handling of a name reused with a different kind
    pub duplicate_tags: DuplicatePolicy,

    /// Reject argument records carrying names the template does not use
    pub strict_args: bool,
}

impl CompileConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duplicate tag policy
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_tags = policy;
        self
    }

    /// Enable or disable strict argument checking
    pub fn with_strict_args(mut self, strict: bool) -> Self {
        self.strict_args = strict;
        self
    }
}

/// A template family: tag aliases plus compile options, loadable from TOML
///
/// ```toml
/// [metadata]
/// name = "billing"
///
/// [compile]
/// duplicate-tags = "first-wins"
/// strict-args = true
///
/// [tags]
/// id = "number"
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FamilyConfig {
    /// Optional name for the family
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Compile options
    pub compile: CompileConfig,
    /// Extra tags, each bound to a built-in kind
    pub tags: BTreeMap<String, ValueKind>,
}

/// TOML structure for deserializing family configs
#[derive(Deserialize)]
struct TomlFamily {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    compile: CompileConfig,
    #[serde(default)]
    tags: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl FamilyConfig {
    /// Load a family config from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a family config from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlFamily = toml::from_str(content)?;

        let mut tags = BTreeMap::new();
        for (tag, kind) in parsed.tags {
            let resolved = ValueKind::builtin(&kind).ok_or_else(|| ConfigError::UnknownKind {
                tag: tag.clone(),
                kind: kind.clone(),
            })?;
            tags.insert(tag, resolved);
        }

        let config = FamilyConfig {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            compile: parsed.compile,
            tags,
        };

        tracing::debug!(
            name = config.name.as_deref().unwrap_or("<unnamed>"),
            tags = config.tags.len(),
            "loaded template family config"
        );

        Ok(config)
    }

    /// Layer this family's tags over an existing registry
    pub fn extend_registry(&self, registry: TypeRegistry) -> TypeRegistry {
        self.tags
            .iter()
            .fold(registry, |registry, (tag, kind)| registry.with_tag(tag.clone(), *kind))
    }

    /// The default tags plus this family's tags
    pub fn registry(&self) -> TypeRegistry {
        self.extend_registry(TypeRegistry::new())
    }
}

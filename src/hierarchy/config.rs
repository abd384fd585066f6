// ABOUTME: Configuration for the operation hierarchy.
// ABOUTME: Loadable from JSON, with builder-style setters for code.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::path;

/// How `OperationHierarchy::update` treats its name and comment arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    /// Re-save the stored record unchanged and ignore the new values.
    #[default]
    Repersist,
    /// Validate and apply the new name and comment.
    Apply,
}

/// Settings for an `OperationHierarchy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Behavior of `update`.
    pub update_mode: UpdateMode,

    /// Appended to an ancestor's path to form the comment of an ancestor
    /// created implicitly.
    pub ancestor_comment_suffix: String,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            update_mode: UpdateMode::default(),
            ancestor_comment_suffix: " operations".to_string(),
        }
    }
}

impl HierarchyConfig {
    /// Parse a config from a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Set the update mode.
    pub fn update_mode(mut self, mode: UpdateMode) -> Self {
        self.update_mode = mode;
        self
    }

    /// Set the suffix used for implicitly created ancestors.
    pub fn ancestor_comment_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.ancestor_comment_suffix = suffix.into();
        self
    }

    /// Comment given to an ancestor created on demand, e.g. `"Sales operations"`.
    pub fn ancestor_comment(&self, name: &str) -> String {
        let segments: Vec<&str> = path::segments(name).collect();
        format!("{}{}", segments.join("/"), self.ancestor_comment_suffix)
    }
}

//! JSON configuration: delimiter pair and default bindings.
//!
//! ```json
//! {
//!   "delimiters": { "left": "{", "right": "}" },
//!   "bindings": { "system": "You are a helpful assistant." }
//! }
//! ```
//!
//! Every field is optional. Configured bindings become persistent bindings of the
//! templates built by [`TemplateConfig::build`], so they take precedence over
//! render-time values of the same name.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::delimiters::Delimiters;
use crate::engine::PromptTemplate;
use crate::error::{PromptTemplateError, Result};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "prompt-template.config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateConfig {
    #[serde(default)]
    pub delimiters: Delimiters,
    #[serde(default)]
    pub bindings: BTreeMap<String, Value>,
}

impl TemplateConfig {
    /// Load a config file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| PromptTemplateError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&contents).map_err(|e| PromptTemplateError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load a config file, falling back to defaults when it does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| PromptTemplateError::ConfigParse {
                path: path.to_path_buf(),
                source: e,
            })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Compile `text` with the configured delimiters and pre-bind every configured value.
    pub fn build(&self, text: impl Into<String>) -> Result<PromptTemplate> {
        let mut template = PromptTemplate::with_delimiters(text, self.delimiters)?;
        for (name, value) in &self.bindings {
            template.add(name.clone(), value.clone());
        }
        Ok(template)
    }
}

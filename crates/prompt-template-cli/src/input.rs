//! Gathering template text, config and render-time variables from the command line.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use prompt_template_core::config::TemplateConfig;
use prompt_template_core::Model;

/// Parse a `NAME=VALUE` pair.
///
/// Values that are JSON strings, arrays or objects are decoded; anything else
/// (including `42` or `true`) is kept as the literal text after `=`.
pub fn parse_var(raw: &str) -> std::result::Result<(String, Value), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{raw}'"));
    }

    let value = match serde_json::from_str::<Value>(value) {
        Ok(decoded @ (Value::String(_) | Value::Array(_) | Value::Object(_))) => decoded,
        _ => Value::String(value.to_string()),
    };
    Ok((name.to_string(), value))
}

/// Build the render-time model: the `--vars` file first, then `--var` pairs on top.
pub fn load_model(vars: Vec<(String, Value)>, vars_file: Option<&Path>) -> Result<Model> {
    let mut model = Model::new();

    if let Some(path) = vars_file {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read variables file {}", path.display()))?;
        let object: serde_json::Map<String, Value> = serde_json::from_str(&contents)
            .with_context(|| format!("{} must contain a JSON object", path.display()))?;
        model.extend(object);
    }

    model.extend(vars);
    tracing::debug!(variables = model.len(), "loaded render-time variables");
    Ok(model)
}

/// Read template text from a file, or from stdin when the path is `-`.
pub fn read_template(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read template from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read template {}", path.display()))
}

/// Load the config (defaults if absent) and apply delimiter overrides.
pub fn load_config(path: &Path, left: Option<char>, right: Option<char>) -> Result<TemplateConfig> {
    let mut config = TemplateConfig::load_or_default(path)?;
    if let Some(left) = left {
        config.delimiters.left = left;
    }
    if let Some(right) = right {
        config.delimiters.right = right;
    }
    Ok(config)
}

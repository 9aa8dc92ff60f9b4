use std::path::Path;

use anyhow::Result;

use prompt_template_core::config::TemplateConfig;
use prompt_template_core::Model;

use crate::input;
use crate::output;

/// Report unbound placeholders without rendering.
///
/// Exits with an error when any placeholder lacks both a config binding and a
/// render-time value.
pub fn run(config: &TemplateConfig, template_path: &Path, model: &Model) -> Result<()> {
    output::print_header("prompt-template check");

    let template = config.build(input::read_template(template_path)?)?;
    let required = template.input_variables();
    output::print_key_value("Placeholders", &required.len().to_string());

    let missing = template.missing_variables(model);
    if missing.is_empty() {
        output::print_success("All placeholders are bound");
        return Ok(());
    }

    for name in &missing {
        output::print_error(&format!("Unbound placeholder: {name}"));
    }
    anyhow::bail!("{}", unbound_summary(missing.len()))
}

fn unbound_summary(count: usize) -> String {
    match count {
        1 => "1 placeholder unbound".to_string(),
        n => format!("{n} placeholders unbound"),
    }
}

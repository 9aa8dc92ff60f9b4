use std::path::Path;

use anyhow::Result;

use prompt_template_core::config::TemplateConfig;

use crate::input;
use crate::output;

/// List the placeholders a template references, in first-seen order.
pub fn run(config: &TemplateConfig, template_path: &Path) -> Result<()> {
    let template = config.build(input::read_template(template_path)?)?;
    let names = template.input_variables();

    output::print_header("prompt-template variables");
    let delimiters = template.delimiters();
    output::print_key_value(
        "Delimiters",
        &format!("{}name{}", delimiters.left, delimiters.right),
    );

    if names.is_empty() {
        output::print_warning("Template has no placeholders");
        return Ok(());
    }

    for (index, name) in names.iter().enumerate() {
        let bound = if template.bindings().contains_key(name) {
            " (bound in config)"
        } else {
            ""
        };
        output::print_item(index + 1, &format!("{name}{bound}"));
    }

    Ok(())
}

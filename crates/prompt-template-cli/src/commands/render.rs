use std::path::Path;

use anyhow::{Context, Result};

use prompt_template_core::config::TemplateConfig;
use prompt_template_core::Model;

use crate::input;
use crate::output;

/// Render a template.
///
/// Config bindings are added persistently; `model` supplies render-time values.
/// The trimmed result goes to `output_path` when given, otherwise to stdout with
/// no decoration so it can be piped.
pub fn run(
    config: &TemplateConfig,
    template_path: &Path,
    model: &Model,
    output_path: Option<&Path>,
) -> Result<()> {
    let template = config.build(input::read_template(template_path)?)?;
    let rendered = template.render_with(model)?;

    match output_path {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            output::print_success(&format!("Rendered to {}", path.display()));
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

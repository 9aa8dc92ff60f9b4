//! prompt-template CLI — render named-placeholder templates from the shell.
//!
//! Provides three commands: `render`, `variables`, and `check`.
//!
//! Bindings from the config file are persistent and win over `--var` / `--vars`
//! values of the same name, matching [`prompt_template_core::PromptTemplate`].

mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use prompt_template_core::config::CONFIG_FILE;
use serde_json::Value;

#[derive(Parser)]
#[command(
    name = "prompt-template",
    about = "Render, inspect and check named-placeholder prompt templates",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to prompt-template.config.json (default: ./prompt-template.config.json)
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Override the opening delimiter
    #[arg(long, global = true)]
    left: Option<char>,

    /// Override the closing delimiter
    #[arg(long, global = true)]
    right: Option<char>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a template with config bindings and render-time variables
    Render {
        /// Template file, or `-` for stdin
        template: PathBuf,

        #[command(flatten)]
        bindings: BindingArgs,

        /// Write the rendered text to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// List the placeholders a template references
    Variables {
        /// Template file, or `-` for stdin
        template: PathBuf,
    },

    /// Report placeholders that would be left unbound, without rendering
    Check {
        /// Template file, or `-` for stdin
        template: PathBuf,

        #[command(flatten)]
        bindings: BindingArgs,
    },
}

#[derive(clap::Args)]
struct BindingArgs {
    /// Render-time variable (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = input::parse_var)]
    vars: Vec<(String, Value)>,

    /// JSON object file of render-time variables (`--var` entries override it)
    #[arg(long = "vars", value_name = "FILE")]
    vars_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = input::load_config(&cli.config, cli.left, cli.right)?;

    match cli.command {
        Commands::Render {
            template,
            bindings,
            output,
        } => {
            let model = input::load_model(bindings.vars, bindings.vars_file.as_deref())?;
            commands::render::run(&config, &template, &model, output.as_deref())?;
        }
        Commands::Variables { template } => {
            commands::variables::run(&config, &template)?;
        }
        Commands::Check { template, bindings } => {
            let model = input::load_model(bindings.vars, bindings.vars_file.as_deref())?;
            commands::check::run(&config, &template, &model)?;
        }
    }

    Ok(())
}

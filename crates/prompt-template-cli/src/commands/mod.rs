//! CLI command implementations for prompt-template.
//!
//! Each module corresponds to a subcommand (`prompt-template <command>`).

pub mod check;
pub mod render;
pub mod variables;

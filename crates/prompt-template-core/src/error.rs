//! Unified error types for the prompt-template toolkit.

use std::path::PathBuf;
use thiserror::Error;

use crate::lexer::SyntaxError;

/// All errors that can occur during prompt-template operations.
#[derive(Error, Debug)]
pub enum PromptTemplateError {
    // --- Template ---

    /// The template text could not be lexed under the chosen delimiters.
    #[error("the template string is not valid: {0}")]
    InvalidTemplate(#[from] SyntaxError),

    /// One or more placeholders have neither a persistent nor a render-time binding.
    #[error(
        "all template variables were not replaced; missing variable names are [{}]",
        .0.join(", ")
    )]
    MissingVariables(Vec<String>),

    // --- Configuration ---

    /// The configuration file (`prompt-template.config.json`) was not found.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, PromptTemplateError>`.
pub type Result<T> = std::result::Result<T, PromptTemplateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variables_lists_every_name() {
        let err = PromptTemplateError::MissingVariables(vec!["b".into(), "c".into()]);
        assert_eq!(
            err.to_string(),
            "all template variables were not replaced; missing variable names are [b, c]"
        );
    }

    #[test]
    fn test_invalid_template_wraps_syntax_error() {
        let err: PromptTemplateError = SyntaxError::UnterminatedPlaceholder { offset: 3 }.into();
        assert!(matches!(err, PromptTemplateError::InvalidTemplate(_)));
        assert!(err.to_string().contains("byte 3"));
    }
}

//! The placeholder-substitution engine.
//!
//! A [`PromptTemplate`] owns an immutable template text (lexed once at
//! construction) and a persistent binding set that only grows. Each render
//! merges the persistent bindings with a borrowed, render-scoped [`Model`],
//! refuses to proceed while any placeholder is unbound, substitutes, and trims
//! the result.
//!
//! ## Precedence
//!
//! When a name is bound both with [`PromptTemplate::add`] and in the render
//! model, the `add` binding wins. Rendering never writes model values back into
//! the persistent set.
//!
//! ## Sharing
//!
//! [`PromptTemplate::add`] takes `&mut self`, so an instance cannot be mutated
//! while a render is reading it. To share one template between threads, wrap it
//! in a `Mutex` or `RwLock`.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::delimiters::Delimiters;
use crate::error::{PromptTemplateError, Result};
use crate::lexer::{self, Token};
use crate::value;

/// Render-time bindings, borrowed for the duration of one render call.
pub type Model = HashMap<String, Value>;

/// A template with named placeholders and an accumulating set of bindings.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    source: String,
    delimiters: Delimiters,
    tokens: Vec<Token>,
    bindings: HashMap<String, Value>,
}

impl PromptTemplate {
    /// Compile a template using the default `{` / `}` delimiters.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        Self::with_delimiters(template, Delimiters::default())
    }

    /// Compile a template with a custom delimiter pair.
    ///
    /// Lexing happens here, so malformed placeholders and invalid delimiters are
    /// reported as [`PromptTemplateError::InvalidTemplate`] before any render.
    pub fn with_delimiters(template: impl Into<String>, delimiters: Delimiters) -> Result<Self> {
        let source = template.into();
        delimiters.validate()?;
        let tokens = lexer::scan(&source, &delimiters)?;

        tracing::debug!(
            placeholders = lexer::placeholder_names(&tokens).len(),
            left = %delimiters.left,
            right = %delimiters.right,
            "compiled prompt template"
        );

        Ok(Self {
            source,
            delimiters,
            tokens,
            bindings: HashMap::new(),
        })
    }

    /// Bind `name` to `value`, replacing any earlier binding of the same name.
    ///
    /// The name does not have to appear in the template.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.bindings.insert(name.into(), value.into());
    }

    /// Render with the persistent bindings only.
    pub fn render(&self) -> Result<String> {
        self.render_with(&Model::new())
    }

    /// Render with the persistent bindings plus `model`.
    ///
    /// Fails with [`PromptTemplateError::MissingVariables`] naming every
    /// placeholder that neither source binds. Leading and trailing whitespace is
    /// trimmed from the output.
    pub fn render_with(&self, model: &Model) -> Result<String> {
        self.validate(model)?;

        tracing::debug!(
            persistent = self.bindings.len(),
            model = model.len(),
            "rendering prompt template"
        );

        let mut out = String::with_capacity(self.source.len());
        for token in &self.tokens {
            match token {
                Token::Text(text) => out.push_str(text),
                Token::Placeholder { name, .. } => {
                    if let Some(bound) = self.bindings.get(name).or_else(|| model.get(name)) {
                        value::write_value(&mut out, bound);
                    }
                }
            }
        }

        Ok(out.trim().to_string())
    }

    /// Every placeholder name the template references, in first-seen order.
    pub fn input_variables(&self) -> Vec<String> {
        lexer::placeholder_names(&self.tokens)
    }

    /// Placeholders bound neither persistently nor in `model`.
    pub fn missing_variables(&self, model: &Model) -> Vec<String> {
        self.input_variables()
            .into_iter()
            .filter(|name| !self.bindings.contains_key(name) && !model.contains_key(name))
            .collect()
    }

    /// Check that rendering with `model` would leave no placeholder unbound.
    pub fn validate(&self, model: &Model) -> Result<()> {
        let missing = self.missing_variables(model);
        if missing.is_empty() {
            return Ok(());
        }
        tracing::debug!(missing = ?missing, "template variables left unbound");
        Err(PromptTemplateError::MissingVariables(missing))
    }

    /// The original template text.
    pub fn template(&self) -> &str {
        &self.source
    }

    pub fn delimiters(&self) -> Delimiters {
        self.delimiters
    }

    /// The persistent bindings established with [`PromptTemplate::add`].
    pub fn bindings(&self) -> &HashMap<String, Value> {
        &self.bindings
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

//! Core library for the prompt-template toolkit.
//!
//! Provides [`engine::PromptTemplate`], a flat named-placeholder template: the
//! template text is lexed once at construction, values are bound either
//! persistently with [`engine::PromptTemplate::add`] or per call through a render
//! model, and every render first checks that no placeholder is left unbound.
//!
//! ```
//! use prompt_template_core::PromptTemplate;
//!
//! let mut template = PromptTemplate::new("Hello {name}!").unwrap();
//! template.add("name", "World");
//! assert_eq!(template.render().unwrap(), "Hello World!");
//! ```
//!
//! Supporting modules:
//! - [`lexer`] — the one scanner that decides what counts as a placeholder
//! - [`delimiters`] — the configurable marker pair (`{` / `}` by default)
//! - [`value`] — how bound values become text
//! - [`config`] — JSON configuration with delimiters and default bindings

pub mod config;
pub mod delimiters;
pub mod engine;
pub mod error;
pub mod lexer;
pub mod value;

pub use delimiters::Delimiters;
pub use engine::{Model, PromptTemplate};
pub use error::{PromptTemplateError, Result};

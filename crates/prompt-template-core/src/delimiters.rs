//! The marker characters that open and close a placeholder.

use serde::{Deserialize, Serialize};

use crate::lexer::{is_identifier_char, SyntaxError, ESCAPE};

/// A placeholder delimiter pair, fixed for the lifetime of a template.
///
/// Defaults to `{` and `}`. The two characters may be identical (`$name$`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    pub left: char,
    pub right: char,
}

impl Delimiters {
    pub const DEFAULT_LEFT: char = '{';
    pub const DEFAULT_RIGHT: char = '}';

    /// Build a validated delimiter pair.
    pub fn new(left: char, right: char) -> Result<Self, SyntaxError> {
        let delimiters = Self { left, right };
        delimiters.validate()?;
        Ok(delimiters)
    }

    /// Reject characters the lexer could not tell apart from text or names.
    pub fn validate(&self) -> Result<(), SyntaxError> {
        for ch in [self.left, self.right] {
            let reason = if ch.is_whitespace() {
                "delimiters must not be whitespace"
            } else if is_identifier_char(ch) {
                "delimiters must not be identifier characters"
            } else if ch == ESCAPE {
                "the backslash is reserved for escapes"
            } else {
                continue;
            };
            return Err(SyntaxError::InvalidDelimiters {
                left: self.left,
                right: self.right,
                reason,
            });
        }
        Ok(())
    }

    pub fn is_delimiter(&self, ch: char) -> bool {
        ch == self.left || ch == self.right
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            left: Self::DEFAULT_LEFT,
            right: Self::DEFAULT_RIGHT,
        }
    }
}

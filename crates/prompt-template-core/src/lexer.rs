//! Delimiter-aware scanner for placeholder templates.
//!
//! Both placeholder discovery and rendering walk the same token stream, so the
//! two can never disagree about what counts as a placeholder.
//!
//! ## Syntax
//!
//! ```text
//! Answer: {answer}. Use \{ and \} for literal delimiters.
//! ```
//!
//! - `{name}` — a placeholder; `name` starts with a letter or `_` and continues
//!   with letters, digits or `_`. Whitespace inside the delimiters is ignored.
//! - `\{` / `\}` — a literal delimiter character; `\\` — a literal backslash.
//!   Any other backslash is text.
//! - A closing delimiter with no opener is an error.

use std::collections::HashSet;
use std::iter::Peekable;
use std::str::CharIndices;

use thiserror::Error;

use crate::delimiters::Delimiters;

/// Escape character that turns a following delimiter or backslash into text.
pub const ESCAPE: char = '\\';

/// Why a template could not be lexed. Offsets are byte positions in the source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("invalid delimiters '{left}' and '{right}': {reason}")]
    InvalidDelimiters {
        left: char,
        right: char,
        reason: &'static str,
    },

    #[error("unterminated placeholder opened at byte {offset}")]
    UnterminatedPlaceholder { offset: usize },

    #[error("empty placeholder at byte {offset}")]
    EmptyPlaceholder { offset: usize },

    #[error("unexpected character {ch:?} in placeholder at byte {offset}")]
    InvalidCharacter { ch: char, offset: usize },

    #[error("unmatched closing delimiter '{ch}' at byte {offset}")]
    UnmatchedDelimiter { ch: char, offset: usize },
}

/// One lexical unit of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text, with escapes already resolved.
    Text(String),
    /// A placeholder name and the byte offset of its opening delimiter.
    Placeholder { name: String, offset: usize },
}

pub(crate) fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

pub(crate) fn is_identifier_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Split `text` into literal runs and placeholders.
pub fn scan(text: &str, delimiters: &Delimiters) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = text.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        if ch == ESCAPE {
            match chars.peek() {
                Some(&(_, next)) if next == ESCAPE || delimiters.is_delimiter(next) => {
                    literal.push(next);
                    chars.next();
                }
                _ => literal.push(ch),
            }
        } else if ch == delimiters.left {
            if !literal.is_empty() {
                tokens.push(Token::Text(std::mem::take(&mut literal)));
            }
            let name = scan_placeholder(&mut chars, offset, delimiters.right)?;
            tokens.push(Token::Placeholder { name, offset });
        } else if ch == delimiters.right {
            // Only reachable for asymmetric pairs; a symmetric right delimiter opens.
            return Err(SyntaxError::UnmatchedDelimiter { ch, offset });
        } else {
            literal.push(ch);
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Text(literal));
    }
    Ok(tokens)
}

/// Lex `text` and return its placeholder names, deduplicated in first-seen order.
pub fn scan_placeholders(text: &str, delimiters: &Delimiters) -> Result<Vec<String>, SyntaxError> {
    Ok(placeholder_names(&scan(text, delimiters)?))
}

/// Collect placeholder names from an already-lexed token stream.
pub fn placeholder_names(tokens: &[Token]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for token in tokens {
        if let Token::Placeholder { name, .. } = token {
            if seen.insert(name.as_str()) {
                names.push(name.clone());
            }
        }
    }
    names
}

fn scan_placeholder(
    chars: &mut Peekable<CharIndices<'_>>,
    open: usize,
    right: char,
) -> Result<String, SyntaxError> {
    skip_whitespace(chars);

    let mut name = String::new();
    while let Some(&(_, ch)) = chars.peek() {
        let accepted = if name.is_empty() {
            is_identifier_start(ch)
        } else {
            is_identifier_char(ch)
        };
        if !accepted {
            break;
        }
        name.push(ch);
        chars.next();
    }

    skip_whitespace(chars);

    match chars.next() {
        None => Err(SyntaxError::UnterminatedPlaceholder { offset: open }),
        Some((_, ch)) if ch == right => {
            if name.is_empty() {
                Err(SyntaxError::EmptyPlaceholder { offset: open })
            } else {
                Ok(name)
            }
        }
        Some((offset, ch)) => Err(SyntaxError::InvalidCharacter { ch, offset }),
    }
}

fn skip_whitespace(chars: &mut Peekable<CharIndices<'_>>) {
    while chars.next_if(|&(_, ch)| ch.is_whitespace()).is_some() {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn braces() -> Delimiters {
        Delimiters::default()
    }

    fn placeholder(name: &str, offset: usize) -> Token {
        Token::Placeholder {
            name: name.into(),
            offset,
        }
    }

    #[test]
    fn test_scan_plain_text() {
        let tokens = scan("no placeholders here", &braces()).unwrap();
        assert_eq!(tokens, vec![Token::Text("no placeholders here".into())]);
    }

    #[test]
    fn test_scan_empty_input() {
        assert!(scan("", &braces()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_mixed() {
        let tokens = scan("Hello {name}!", &braces()).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Text("Hello ".into()),
                placeholder("name", 6),
                Token::Text("!".into()),
            ]
        );
    }

    #[test]
    fn test_scan_whitespace_inside_delimiters() {
        let tokens = scan("{  user_id }", &braces()).unwrap();
        assert_eq!(tokens, vec![placeholder("user_id", 0)]);
    }

    #[test]
    fn test_scan_adjacent_placeholders() {
        let names = scan_placeholders("{a}{b}{a}", &braces()).unwrap();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_scan_escaped_delimiters_are_text() {
        let tokens = scan(r"json: \{ {key} \}", &braces()).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Text("json: { ".into()),
                placeholder("key", 9),
                Token::Text(" }".into()),
            ]
        );
    }

    #[test]
    fn test_scan_lone_backslash_is_text() {
        let tokens = scan(r"C:\path", &braces()).unwrap();
        assert_eq!(tokens, vec![Token::Text(r"C:\path".into())]);
    }

    #[test]
    fn test_scan_escaped_backslash_before_placeholder() {
        let tokens = scan(r"C:\\{dir}", &braces()).unwrap();
        assert_eq!(
            tokens,
            vec![Token::Text(r"C:\".into()), placeholder("dir", 4)]
        );
        let tokens = scan(r"C:\\\{dir\}", &braces()).unwrap();
        assert_eq!(tokens, vec![Token::Text(r"C:\{dir}".into())]);
    }

    #[test]
    fn test_scan_unicode_identifier() {
        let names = scan_placeholders("{café} {_x1}", &braces()).unwrap();
        assert_eq!(names, vec!["café", "_x1"]);
    }

    #[test]
    fn test_scan_unterminated() {
        assert_eq!(
            scan("Hello {name", &braces()),
            Err(SyntaxError::UnterminatedPlaceholder { offset: 6 })
        );
        assert_eq!(
            scan("{", &braces()),
            Err(SyntaxError::UnterminatedPlaceholder { offset: 0 })
        );
    }

    #[test]
    fn test_scan_empty_placeholder() {
        assert_eq!(
            scan("a { } b", &braces()),
            Err(SyntaxError::EmptyPlaceholder { offset: 2 })
        );
    }

    #[test]
    fn test_scan_leading_digit_rejected() {
        assert_eq!(
            scan("{1st}", &braces()),
            Err(SyntaxError::InvalidCharacter { ch: '1', offset: 1 })
        );
    }

    #[test]
    fn test_scan_space_in_name_rejected() {
        assert_eq!(
            scan("{first name}", &braces()),
            Err(SyntaxError::InvalidCharacter { ch: 'n', offset: 7 })
        );
    }

    #[test]
    fn test_scan_nested_open_rejected() {
        assert_eq!(
            scan("{a{b}}", &braces()),
            Err(SyntaxError::InvalidCharacter { ch: '{', offset: 2 })
        );
    }

    #[test]
    fn test_scan_unmatched_close() {
        assert_eq!(
            scan("oops}", &braces()),
            Err(SyntaxError::UnmatchedDelimiter { ch: '}', offset: 4 })
        );
    }

    #[test]
    fn test_scan_custom_delimiters() {
        let angle = Delimiters::new('<', '>').unwrap();
        let tokens = scan("{literal} <name>", &angle).unwrap();
        assert_eq!(
            tokens,
            vec![Token::Text("{literal} ".into()), placeholder("name", 10)]
        );
    }

    #[test]
    fn test_scan_symmetric_delimiters() {
        let dollar = Delimiters::new('$', '$').unwrap();
        assert_eq!(
            scan_placeholders("$a$ and $b$", &dollar).unwrap(),
            vec!["a", "b"]
        );
        assert_eq!(
            scan("costs \\$5", &dollar).unwrap(),
            vec![Token::Text("costs $5".into())]
        );
        assert!(scan("costs $5", &dollar).is_err());
    }

    #[test]
    fn test_scan_placeholders_is_stable() {
        let text = "{x} {y} {x} {z}";
        let first = scan_placeholders(text, &braces()).unwrap();
        for _ in 0..3 {
            assert_eq!(scan_placeholders(text, &braces()).unwrap(), first);
        }
    }
}

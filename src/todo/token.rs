//! Description tokens.
//!
//! A task description is split on single spaces and each fragment is
//! classified on its own:
//!
//! - `+name` is a project tag
//! - `@name` is a context tag
//! - `key:value` (exactly one colon) is a key/value tag
//! - anything else is a plain word
//!
//! Joining tokens back together is lossy: runs of spaces collapse to one,
//! and fragments like `a:b:c` stay words.

use std::fmt;

const SEPARATOR: char = ' ';
const PROJECT_PREFIX: char = '+';
const CONTEXT_PREFIX: char = '@';
const KEY_VALUE_SEPARATOR: char = ':';

/// One space-delimited fragment of a task description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Word(String),
    Project(String),
    Context(String),
    KeyValue { key: String, value: String },
}

impl Token {
    /// Classify a single fragment. Never fails.
    #[must_use]
    pub fn parse(fragment: &str) -> Self {
        if let Some(project) = fragment.strip_prefix(PROJECT_PREFIX) {
            return Self::Project(project.to_string());
        }
        if let Some(context) = fragment.strip_prefix(CONTEXT_PREFIX) {
            return Self::Context(context.to_string());
        }
        if fragment.matches(KEY_VALUE_SEPARATOR).count() == 1 {
            if let Some((key, value)) = fragment.split_once(KEY_VALUE_SEPARATOR) {
                return Self::KeyValue {
                    key: key.to_string(),
                    value: value.to_string(),
                };
            }
        }
        Self::Word(fragment.to_string())
    }

    /// Shorthand for building a key/value tag.
    #[must_use]
    pub fn key_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::KeyValue {
            key: key.into(),
            value: value.into(),
        }
    }

}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(word) => f.write_str(word),
            Self::Project(project) => write!(f, "{PROJECT_PREFIX}{project}"),
            Self::Context(context) => write!(f, "{CONTEXT_PREFIX}{context}"),
            Self::KeyValue { key, value } => write!(f, "{key}{KEY_VALUE_SEPARATOR}{value}"),
        }
    }
}

/// Split a description into tokens on single spaces.
///
/// Consecutive spaces produce empty words, which vanish again when joined.
#[must_use]
pub fn tokenize(description: &str) -> Vec<Token> {
    description.split(SEPARATOR).map(Token::parse).collect()
}

/// Render tokens back to description text, separated by single spaces.
#[must_use]
pub fn join(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let text = token.to_string();
        if text.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(SEPARATOR);
        }
        out.push_str(&text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_tags() {
        assert_eq!(Token::parse("+home"), Token::Project("home".to_string()));
        assert_eq!(Token::parse("@phone"), Token::Context("phone".to_string()));
        assert_eq!(
            Token::parse("due:2024-01-01"),
            Token::key_value("due", "2024-01-01")
        );
        assert_eq!(Token::parse("milk"), Token::Word("milk".to_string()));
    }

    #[test]
    fn test_two_colons_is_a_word() {
        assert_eq!(Token::parse("a:b:c"), Token::Word("a:b:c".to_string()));
    }

    #[test]
    fn test_prefix_wins_over_colon() {
        assert_eq!(Token::parse("+proj:x"), Token::Project("proj:x".to_string()));
        assert_eq!(Token::parse("@ctx:y"), Token::Context("ctx:y".to_string()));
    }

    #[test]
    fn test_empty_key_and_value() {
        assert_eq!(Token::parse(":x"), Token::key_value("", "x"));
        assert_eq!(Token::parse("x:"), Token::key_value("x", ""));
    }

    #[test]
    fn test_bare_prefixes() {
        assert_eq!(Token::parse("+"), Token::Project(String::new()));
        assert_eq!(Token::parse("@").to_string(), "@");
    }

    #[test]
    fn test_tokenize_and_join() {
        let tokens = tokenize("Buy milk +errands @store due:2024-01-01");
        assert_eq!(
            tokens,
            vec![
                Token::Word("Buy".to_string()),
                Token::Word("milk".to_string()),
                Token::Project("errands".to_string()),
                Token::Context("store".to_string()),
                Token::key_value("due", "2024-01-01"),
            ]
        );
        assert_eq!(join(&tokens), "Buy milk +errands @store due:2024-01-01");
    }

    #[test]
    fn test_join_collapses_space_runs() {
        let tokens = tokenize("a  b   c");
        assert_eq!(join(&tokens), "a b c");
    }

    #[test]
    fn test_empty_description() {
        let tokens = tokenize("");
        assert_eq!(tokens, vec![Token::Word(String::new())]);
        assert_eq!(join(&tokens), "");
    }
}

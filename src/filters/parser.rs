//! Query string tokenizer.
//!
//! Turns a raw search box line into a [`ParsedQuery`]. The parser knows nothing
//! about field semantics; every `key:value` pair is recorded under its key verbatim
//! and the resolver decides what the keys mean.
//!
//! # Syntax
//!
//! ```text
//! query     := token (whitespace token)*
//! token     := term | key ":" value
//! value     := "!"? chars
//! chars     := (char | '"' anything-but-quote* '"'?)*
//! ```
//!
//! - Whitespace inside double quotes belongs to the token; quotes are removed
//!   from the final value. An unterminated quote runs to the end of input.
//! - The key is everything before the first colon outside quotes.
//! - A leading unquoted `!` on a value sets [`FilterModifier::Not`]. Free-text
//!   terms are never negated.
//!
//! # Examples
//!
//! ```rust
//! # use evidence_query::filters::parser::parse_query;
//! let query = parse_query(r#"foo tag:"sql injection" operator:!jdoe"#);
//!
//! assert_eq!(query.get("").unwrap()[0].value, "foo");
//! assert_eq!(query.get("tag").unwrap()[0].value, "sql injection");
//! assert!(query.get("operator").unwrap()[0].modifier.is_some());
//! ```

use std::iter::Peekable;
use std::str::Chars;

use super::ast::{ParsedQuery, ParsedToken};
use crate::models::FilterModifier;

/// A character from the input and whether it sat inside double quotes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScopedChar {
    ch: char,
    quoted: bool,
}

/// Split input into tokens on whitespace outside quotes
fn tokenize(input: &str) -> Vec<Vec<ScopedChar>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }

        tokens.push(read_token(&mut chars));
    }

    tokens
}

/// Read one token, tracking quote scope per character
///
/// Always consumes at least one character when called on non-whitespace.
fn read_token(chars: &mut Peekable<Chars>) -> Vec<ScopedChar> {
    let mut token = Vec::new();
    let mut in_quotes = false;

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() && !in_quotes {
            break;
        }
        chars.next();

        if ch == '"' {
            in_quotes = !in_quotes;
            continue;
        }
        token.push(ScopedChar { ch, quoted: in_quotes });
    }

    token
}

fn collect(chars: &[ScopedChar]) -> String {
    chars.iter().map(|c| c.ch).collect()
}

/// Split a token into its key (`""` for free text) and value
fn classify(token: &[ScopedChar]) -> (String, ParsedToken) {
    let Some(colon) = token.iter().position(|c| c.ch == ':' && !c.quoted) else {
        return (String::new(), ParsedToken::plain(collect(token)));
    };

    let key = collect(&token[..colon]);
    let rest = &token[colon + 1..];

    // `:value` has no field to negate; keep it as free text
    if key.is_empty() {
        return (key, ParsedToken::plain(collect(rest)));
    }

    match rest.split_first() {
        Some((first, value)) if first.ch == FilterModifier::PREFIX && !first.quoted => {
            (key, ParsedToken::negated(collect(value)))
        }
        _ => (key, ParsedToken::plain(collect(rest))),
    }
}

/// Parse a raw query string into a [`ParsedQuery`]
///
/// Never fails: malformed input (unterminated quotes, empty values, stray
/// punctuation) still produces a best-effort map.
///
/// Examples:
/// - `""` → empty map
/// - `"foo bar"` → `{"": [foo, bar]}`
/// - `"tag:\"a b\""` → `{"tag": [a b]}`
/// - `"tag:!done"` → `{"tag": [done (not)]}`
/// - `"range:"` → `{"range": [""]}`
pub fn parse_query(input: &str) -> ParsedQuery {
    let mut query = ParsedQuery::new();

    for token in tokenize(input) {
        let (key, parsed) = classify(&token);
        query.push(key, parsed);
    }

    query
}

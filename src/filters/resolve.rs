//! Resolution of parsed queries into [`SearchOptions`].
//!
//! Each known key is dispatched through [`FilterField`]. Resolution is forgiving:
//! values that match no known tag, user or evidence type are dropped, malformed
//! single-valued clauses leave their dimension unset, and unknown keys are
//! ignored. Nothing here fails. Callers that want to tell users about dropped
//! values use [`resolve_with_report`].

use serde::Serialize;
use tracing::debug;

use super::ast::{FilterField, ParsedQuery, ParsedToken};
use super::dates::parse_date_range;
use super::parser::parse_query;
use super::serialize::render_term;
use crate::models::{
    AsBullet, BulletId, BulletProps, EvidenceType, FilterModified, SearchOptions, Tag, User,
};

/// Values accepted by `sort:` for ascending (oldest first) order
const ASCENDING_SORT_VALUES: [&str; 3] = ["asc", "ascending", "chronological"];

/// Something the resolver could not apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ResolutionIssue {
    /// Value matched no known entity and was dropped
    Unresolved { field: FilterField, value: String },
    /// Single-valued clause could not be interpreted
    Malformed { field: FilterField, value: String },
    /// Key is not a supported field
    UnknownField { key: String },
}

impl std::fmt::Display for ResolutionIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionIssue::Unresolved { field, value } => {
                write!(f, "no {} matches '{}'", field.key(), value)
            }
            ResolutionIssue::Malformed { field, value } => {
                write!(f, "invalid {} value '{}'", field.key(), value)
            }
            ResolutionIssue::UnknownField { key } => write!(f, "unknown filter '{}'", key),
        }
    }
}

/// Resolve a parsed query against lookup snapshots of tags and users
pub fn resolve(parsed: &ParsedQuery, known_tags: &[Tag], known_users: &[User]) -> SearchOptions {
    resolve_with_report(parsed, known_tags, known_users).0
}

/// Parse and resolve in one step
pub fn string_to_search(input: &str, known_tags: &[Tag], known_users: &[User]) -> SearchOptions {
    resolve(&parse_query(input), known_tags, known_users)
}

/// Like [`resolve`], also returning every value that could not be applied
pub fn resolve_with_report(
    parsed: &ParsedQuery,
    known_tags: &[Tag],
    known_users: &[User],
) -> (SearchOptions, Vec<ResolutionIssue>) {
    let mut opts = SearchOptions::new();
    let mut issues = Vec::new();

    for (key, tokens) in parsed.iter() {
        let Some(field) = FilterField::from_key(key) else {
            debug!(key, "ignoring unknown filter key");
            issues.push(ResolutionIssue::UnknownField { key: key.to_string() });
            continue;
        };

        match field {
            FilterField::Text => opts.text = join_terms(tokens),
            FilterField::Meta => {
                opts.meta = non_empty(tokens.iter().map(meta_bullet).collect());
            }
            FilterField::Tag => {
                opts.tags = resolve_entities(field, tokens, &mut issues, |value| {
                    known_tags.iter().find(|tag| tag.name == value)
                });
            }
            FilterField::Operator => {
                opts.operator = resolve_entities(field, tokens, &mut issues, |value| {
                    known_users.iter().find(|user| user.slug == value)
                });
            }
            FilterField::Type => {
                opts.evidence_type =
                    resolve_entities(field, tokens, &mut issues, EvidenceType::from_id);
            }
            FilterField::Range => {
                let Some(token) = tokens.first() else { continue };
                opts.date_range = parse_date_range(&token.value);
                if opts.date_range.is_none() {
                    malformed(field, token, &mut issues);
                }
            }
            FilterField::Linked => {
                let Some(token) = tokens.first() else { continue };
                opts.has_link = parse_linked(&token.value);
                if opts.has_link.is_none() {
                    malformed(field, token, &mut issues);
                }
            }
            FilterField::Uuid => {
                opts.uuid = tokens.first().map(|token| token.value.clone());
            }
            FilterField::WithEvidence => {
                opts.with_evidence_uuid =
                    non_empty(tokens.iter().map(|token| token.value.clone()).collect());
            }
            FilterField::Sort => {
                opts.sort_asc = tokens
                    .first()
                    .is_some_and(|token| ASCENDING_SORT_VALUES.contains(&token.value.as_str()));
            }
        }
    }

    (opts, issues)
}

/// Join free-text terms, re-quoting those that would not survive re-parsing
fn join_terms(tokens: &[ParsedToken]) -> String {
    tokens
        .iter()
        .filter(|token| !token.value.is_empty())
        .map(|token| render_term(&token.value))
        .collect::<Vec<_>>()
        .join(" ")
}

fn meta_bullet(token: &ParsedToken) -> BulletProps {
    BulletProps::new(BulletId::Text(token.value.clone()), token.value.clone())
        .with_modifier(token.modifier)
}

/// Match every token through `lookup`, keeping input order and dropping misses
fn resolve_entities<'a, T, F>(
    field: FilterField,
    tokens: &'a [ParsedToken],
    issues: &mut Vec<ResolutionIssue>,
    mut lookup: F,
) -> Option<Vec<BulletProps>>
where
    T: AsBullet,
    F: FnMut(&'a str) -> Option<T>,
{
    let mut bullets: Vec<BulletProps> = Vec::with_capacity(tokens.len());

    for token in tokens {
        match lookup(&token.value) {
            Some(entity) => bullets.push(FilterModified::new(entity, token.modifier).into()),
            None => {
                debug!(field = field.key(), value = %token.value, "dropping unresolved value");
                issues.push(ResolutionIssue::Unresolved { field, value: token.value.clone() });
            }
        }
    }

    non_empty(bullets)
}

fn malformed(field: FilterField, token: &ParsedToken, issues: &mut Vec<ResolutionIssue>) {
    debug!(field = field.key(), value = %token.value, "ignoring malformed value");
    issues.push(ResolutionIssue::Malformed { field, value: token.value.clone() });
}

fn parse_linked(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    if values.is_empty() { None } else { Some(values) }
}

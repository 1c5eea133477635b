use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::FilterModifier;

/// Field keys understood by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterField {
    /// Free-text terms (empty key)
    Text,
    /// Free-form meta terms, resolved as themselves
    Meta,
    /// Tag names, resolved against known tags
    Tag,
    /// User slugs, resolved against known users
    Operator,
    /// Evidence type identifiers
    Type,
    /// `start,end` date range
    Range,
    /// `true` / `false`
    Linked,
    Uuid,
    WithEvidence,
    Sort,
}

impl FilterField {
    /// Key as written in query strings
    pub fn key(self) -> &'static str {
        match self {
            FilterField::Text => "",
            FilterField::Meta => "meta",
            FilterField::Tag => "tag",
            FilterField::Operator => "operator",
            FilterField::Type => "type",
            FilterField::Range => "range",
            FilterField::Linked => "linked",
            FilterField::Uuid => "uuid",
            FilterField::WithEvidence => "with-evidence",
            FilterField::Sort => "sort",
        }
    }

    /// Case-sensitive key lookup; unknown keys return `None`
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "" => Some(FilterField::Text),
            "meta" => Some(FilterField::Meta),
            "tag" => Some(FilterField::Tag),
            "operator" => Some(FilterField::Operator),
            "type" => Some(FilterField::Type),
            "range" => Some(FilterField::Range),
            "linked" => Some(FilterField::Linked),
            "uuid" => Some(FilterField::Uuid),
            "with-evidence" => Some(FilterField::WithEvidence),
            "sort" => Some(FilterField::Sort),
            _ => None,
        }
    }
}

/// One value from the query string with its negation flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedToken {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<FilterModifier>,
}

impl ParsedToken {
    pub fn new(value: impl Into<String>, modifier: Option<FilterModifier>) -> Self {
        Self { value: value.into(), modifier }
    }

    pub fn plain(value: impl Into<String>) -> Self {
        Self::new(value, None)
    }

    pub fn negated(value: impl Into<String>) -> Self {
        Self::new(value, Some(FilterModifier::Not))
    }
}

/// Tokenized query: field key (`""` for free text) to its values in input order
///
/// The parser stores every key it sees, known or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedQuery {
    fields: BTreeMap<String, Vec<ParsedToken>>,
}

impl ParsedQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, token: ParsedToken) {
        self.fields.entry(key.into()).or_default().push(token);
    }

    /// Values recorded under `key`, in input order
    pub fn get(&self, key: &str) -> Option<&[ParsedToken]> {
        self.fields.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ParsedToken])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_key_roundtrip() {
        let all = [
            FilterField::Text,
            FilterField::Meta,
            FilterField::Tag,
            FilterField::Operator,
            FilterField::Type,
            FilterField::Range,
            FilterField::Linked,
            FilterField::Uuid,
            FilterField::WithEvidence,
            FilterField::Sort,
        ];
        for field in all {
            assert_eq!(FilterField::from_key(field.key()), Some(field));
        }
    }

    #[test]
    fn test_field_keys_case_sensitive() {
        assert_eq!(FilterField::from_key("TAG"), None);
        assert_eq!(FilterField::from_key("Tag"), None);
        assert_eq!(FilterField::from_key("color"), None);
    }

    #[test]
    fn test_parsed_query_empty() {
        let query = ParsedQuery::new();
        assert!(query.is_empty());
        assert_eq!(query.len(), 0);
        assert!(query.get("").is_none());
    }

    #[test]
    fn test_parsed_query_preserves_order_per_key() {
        let mut query = ParsedQuery::new();
        query.push("tag", ParsedToken::plain("b"));
        query.push("", ParsedToken::plain("x"));
        query.push("tag", ParsedToken::negated("a"));

        assert_eq!(query.len(), 2);
        let tags = query.get("tag").unwrap();
        assert_eq!(tags, &[ParsedToken::plain("b"), ParsedToken::negated("a")]);
    }

    #[test]
    fn test_parsed_query_json_is_a_plain_map() {
        let mut query = ParsedQuery::new();
        query.push("operator", ParsedToken::negated("jdoe"));
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"operator":[{"value":"jdoe","modifier":"not"}]}"#);
    }
}

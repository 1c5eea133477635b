//! Canonical query string rendering for [`SearchOptions`].
//!
//! Segments are emitted in a fixed order: text, meta, tag, operator, range,
//! linked, sort, type, with-evidence, uuid. Parsing and resolving the output
//! with the same tag/user snapshot yields the same `SearchOptions`.

use super::ast::FilterField;
use super::dates::format_iso_date;
use crate::models::{BulletProps, FilterModifier, SearchOptions};

/// Render a free-text term, quoting it if it would otherwise split or read as `key:value`
pub(crate) fn render_term(value: &str) -> String {
    if value.chars().any(|c| c.is_whitespace() || c == ':') {
        quote(value)
    } else {
        value.to_string()
    }
}

/// Render a filter value, quoting it if it would otherwise split or read as negated
fn render_filter_value(value: &str) -> String {
    if value.chars().any(char::is_whitespace) || value.starts_with(FilterModifier::PREFIX) {
        quote(value)
    } else {
        value.to_string()
    }
}

// Embedded quotes are not escaped
fn quote(value: &str) -> String {
    format!("\"{}\"", value)
}

fn clause(field: FilterField, negated: bool, value: &str) -> String {
    let prefix = if negated { FilterModifier::PREFIX.to_string() } else { String::new() };
    format!("{}:{}{}", field.key(), prefix, value)
}

fn push_bullets<F>(
    segments: &mut Vec<String>,
    field: FilterField,
    bullets: Option<&[BulletProps]>,
    render: F,
) where
    F: Fn(&BulletProps) -> String,
{
    for bullet in bullets.unwrap_or_default() {
        segments.push(clause(field, bullet.is_negated(), &render(bullet)));
    }
}

/// Render `opts` as its canonical query string
pub fn serialize(opts: &SearchOptions) -> String {
    let mut segments = vec![opts.text.trim().to_string()];

    push_bullets(&mut segments, FilterField::Meta, opts.meta.as_deref(), |b| {
        render_filter_value(&b.name)
    });
    push_bullets(&mut segments, FilterField::Tag, opts.tags.as_deref(), |b| {
        render_filter_value(&b.name)
    });
    // Slugs never contain spaces
    push_bullets(&mut segments, FilterField::Operator, opts.operator.as_deref(), |b| {
        b.id.to_string()
    });

    if let Some((start, end)) = opts.date_range {
        let range = format!("{},{}", format_iso_date(start), format_iso_date(end));
        segments.push(clause(FilterField::Range, false, &range));
    }
    if let Some(has_link) = opts.has_link {
        segments.push(clause(FilterField::Linked, false, &has_link.to_string()));
    }
    if opts.sort_asc {
        segments.push(clause(FilterField::Sort, false, "asc"));
    }

    push_bullets(&mut segments, FilterField::Type, opts.evidence_type.as_deref(), |b| {
        render_filter_value(&b.id.to_string())
    });

    for uuid in opts.with_evidence_uuid.as_deref().unwrap_or_default() {
        segments.push(clause(FilterField::WithEvidence, false, uuid));
    }
    if let Some(uuid) = &opts.uuid {
        segments.push(clause(FilterField::Uuid, false, &render_filter_value(uuid)));
    }

    segments.retain(|segment| !segment.is_empty());
    segments.join(" ")
}

/// Alias of [`serialize`] matching [`string_to_search`](super::string_to_search)
pub fn stringify_search(opts: &SearchOptions) -> String {
    serialize(opts)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_serialize_default_is_empty() {
        assert_eq!(serialize(&SearchOptions::default()), "");
    }

    #[test]
    fn test_serialize_sort() {
        let asc = SearchOptions { sort_asc: true, ..Default::default() };
        assert_eq!(serialize(&asc), "sort:asc");

        let desc = SearchOptions { text: "foo".to_string(), ..Default::default() };
        assert!(!serialize(&desc).contains("sort:"));
    }

    #[test]
    fn test_serialize_quotes_tag_with_space() {
        let opts = SearchOptions {
            tags: Some(vec![BulletProps::new(1, "sql injection")]),
            ..Default::default()
        };
        assert_eq!(serialize(&opts), r#"tag:"sql injection""#);
    }

    #[test]
    fn test_serialize_negation_before_quotes() {
        let opts = SearchOptions {
            tags: Some(vec![BulletProps::new(1, "needs review").negated()]),
            ..Default::default()
        };
        assert_eq!(serialize(&opts), r#"tag:!"needs review""#);
    }

    #[test]
    fn test_serialize_quotes_leading_bang() {
        let opts = SearchOptions {
            meta: Some(vec![BulletProps::new("!x", "!x")]),
            ..Default::default()
        };
        assert_eq!(serialize(&opts), r#"meta:"!x""#);
    }

    #[test]
    fn test_serialize_operator_never_quoted() {
        let opts = SearchOptions {
            operator: Some(vec![BulletProps::new("jdoe", "jdoe").negated()]),
            ..Default::default()
        };
        assert_eq!(serialize(&opts), "operator:!jdoe");
    }

    #[test]
    fn test_serialize_linked_false_is_kept() {
        let opts = SearchOptions { has_link: Some(false), ..Default::default() };
        assert_eq!(serialize(&opts), "linked:false");
    }

    #[test]
    fn test_serialize_type_uses_id() {
        let opts = SearchOptions {
            evidence_type: Some(vec![BulletProps::new("terminal-recording", "Terminal Recording")]),
            ..Default::default()
        };
        assert_eq!(serialize(&opts), "type:terminal-recording");
    }

    #[test]
    fn test_serialize_fixed_order() {
        let opts = SearchOptions {
            text: "foo bar".to_string(),
            meta: Some(vec![BulletProps::new("m", "m")]),
            tags: Some(vec![BulletProps::new(2, "done").negated()]),
            operator: Some(vec![BulletProps::new("jdoe", "jdoe")]),
            evidence_type: Some(vec![BulletProps::new("image", "Image")]),
            date_range: Some((
                NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2023, 1, 31).unwrap(),
            )),
            has_link: Some(true),
            sort_asc: true,
            uuid: Some("u-1".to_string()),
            with_evidence_uuid: Some(vec!["e-2".to_string(), "e-1".to_string()]),
        };

        assert_eq!(
            serialize(&opts),
            "foo bar meta:m tag:!done operator:jdoe range:2023-01-01,2023-01-31 linked:true \
             sort:asc type:image with-evidence:e-2 with-evidence:e-1 uuid:u-1"
        );
    }

    #[test]
    fn test_serialize_quotes_uuid_when_needed() {
        let spaced = SearchOptions { uuid: Some("a b".to_string()), ..Default::default() };
        assert_eq!(serialize(&spaced), r#"uuid:"a b""#);

        let bang = SearchOptions { uuid: Some("!x".to_string()), ..Default::default() };
        assert_eq!(serialize(&bang), r#"uuid:"!x""#);

        let plain = SearchOptions { uuid: Some("abc-123".to_string()), ..Default::default() };
        assert_eq!(serialize(&plain), "uuid:abc-123");
    }

    #[test]
    fn test_serialize_with_evidence_never_quoted() {
        // Evidence ids are emitted raw even when that loses the value on re-parse
        let opts = SearchOptions {
            with_evidence_uuid: Some(vec!["a b".to_string(), "!x".to_string()]),
            ..Default::default()
        };
        assert_eq!(serialize(&opts), "with-evidence:a b with-evidence:!x");
    }

    #[test]
    fn test_serialize_embedded_quote_does_not_panic() {
        let opts = SearchOptions {
            tags: Some(vec![BulletProps::new(9, "say \"hi\"")]),
            ..Default::default()
        };
        assert_eq!(serialize(&opts), "tag:\"say \"hi\"\"");
    }

    #[test]
    fn test_render_term() {
        assert_eq!(render_term("foo"), "foo");
        assert_eq!(render_term("foo bar"), "\"foo bar\"");
        assert_eq!(render_term("a:b"), "\"a:b\"");
        assert_eq!(render_term("!foo"), "!foo");
    }
}

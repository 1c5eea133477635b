//! Saved-search links
//!
//! The canonical query string is the only representation placed in a URL:
//! `?q=<query>&name=<label>`.

use anyhow::{Context, Result, bail};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

// Everything except RFC 3986 unreserved characters
const QUERY_ENCODE_SET: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

const QUERY_PARAM: &str = "q";
const NAME_PARAM: &str = "name";

/// A search query and optional label recovered from a link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedSearch {
    pub query: String,
    pub name: Option<String>,
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE_SET).to_string()
}

fn decode_component(value: &str) -> Result<String> {
    // Form encoding writes spaces as '+'
    let value = value.replace('+', " ");
    let decoded = percent_decode_str(&value)
        .decode_utf8()
        .with_context(|| format!("Link parameter is not valid UTF-8: {}", value))?;
    Ok(decoded.into_owned())
}

/// Build the query-string portion of a saved-search link
///
/// # Examples
///
/// ```
/// use evidence_query::utils::links::encode_search_link;
///
/// let link = encode_search_link(r#"tag:"needs review""#, Some("Triage"));
/// assert_eq!(link, "?q=tag%3A%22needs%20review%22&name=Triage");
/// ```
pub fn encode_search_link(query: &str, name: Option<&str>) -> String {
    let mut link = format!("?{}={}", QUERY_PARAM, encode_component(query));
    if let Some(name) = name {
        link.push_str(&format!("&{}={}", NAME_PARAM, encode_component(name)));
    }
    link
}

/// Recover the query and name from a full URL or bare `q=...&name=...` string
pub fn decode_search_link(link: &str) -> Result<SavedSearch> {
    let params = link.split_once('?').map_or(link, |(_, params)| params);
    let params = params.split_once('#').map_or(params, |(params, _)| params);

    let mut query = None;
    let mut name = None;

    for pair in params.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            QUERY_PARAM if query.is_none() => query = Some(decode_component(value)?),
            NAME_PARAM if name.is_none() => name = Some(decode_component(value)?),
            _ => {}
        }
    }

    let Some(query) = query else {
        bail!("Search link has no '{}' parameter", QUERY_PARAM);
    };

    Ok(SavedSearch { query, name })
}

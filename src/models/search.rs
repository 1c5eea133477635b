use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::bullet::BulletProps;

/// Strongly-typed filter criteria resolved from a query string
///
/// Multi-valued dimensions are `None` when nothing resolved for them; they are never
/// `Some(vec![])` when produced by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    /// Free-text terms, space-joined and re-quoted
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Vec<BulletProps>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<BulletProps>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Vec<BulletProps>>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub evidence_type: Option<Vec<BulletProps>>,
    /// Inclusive calendar range; start may be after end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// `Some(false)` is distinct from `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_link: Option<bool>,
    #[serde(default)]
    pub sort_asc: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_evidence_uuid: Option<Vec<String>>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no dimension is populated and the default sort applies
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

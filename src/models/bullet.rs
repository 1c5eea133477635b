use std::fmt;

use serde::{Deserialize, Serialize};

/// Per-value negation flag. Absence (`None`) means "include matches".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterModifier {
    Not,
}

impl FilterModifier {
    /// Query-string prefix marking a negated value
    pub const PREFIX: char = '!';
}

/// Identifier of a bullet: numeric for tags, textual for everything else
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BulletId {
    Number(i64),
    Text(String),
}

impl fmt::Display for BulletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulletId::Number(n) => write!(f, "{}", n),
            BulletId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for BulletId {
    fn from(value: i64) -> Self {
        BulletId::Number(value)
    }
}

impl From<&str> for BulletId {
    fn from(value: &str) -> Self {
        BulletId::Text(value.to_string())
    }
}

impl From<String> for BulletId {
    fn from(value: String) -> Self {
        BulletId::Text(value)
    }
}

/// UI-facing filter value: every resolvable value (tag, user, meta term, evidence
/// type) reduces to this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletProps {
    pub id: BulletId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<FilterModifier>,
}

impl BulletProps {
    pub fn new(id: impl Into<BulletId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), modifier: None }
    }

    pub fn with_modifier(mut self, modifier: Option<FilterModifier>) -> Self {
        self.modifier = modifier;
        self
    }

    pub fn negated(self) -> Self {
        self.with_modifier(Some(FilterModifier::Not))
    }

    pub fn is_negated(&self) -> bool {
        self.modifier == Some(FilterModifier::Not)
    }
}

/// Entities that can be shown as a filter bullet
pub trait AsBullet {
    fn bullet_id(&self) -> BulletId;
    fn bullet_name(&self) -> String;
}

impl<T: AsBullet + ?Sized> AsBullet for &T {
    fn bullet_id(&self) -> BulletId {
        (**self).bullet_id()
    }

    fn bullet_name(&self) -> String {
        (**self).bullet_name()
    }
}

/// A resolved entity paired with the modifier of the token it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterModified<T> {
    pub value: T,
    pub modifier: Option<FilterModifier>,
}

impl<T> FilterModified<T> {
    pub fn new(value: T, modifier: Option<FilterModifier>) -> Self {
        Self { value, modifier }
    }
}

impl<T: AsBullet> From<FilterModified<T>> for BulletProps {
    fn from(modified: FilterModified<T>) -> Self {
        BulletProps {
            id: modified.value.bullet_id(),
            name: modified.value.bullet_name(),
            modifier: modified.modifier,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::bullet::{AsBullet, BulletId};

/// A tag from the current operation's lookup snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color_name: String,
}

impl Tag {
    pub fn new(id: i64, name: impl Into<String>, color_name: impl Into<String>) -> Self {
        Self { id, name: name.into(), color_name: color_name.into() }
    }
}

impl AsBullet for Tag {
    fn bullet_id(&self) -> BulletId {
        BulletId::Number(self.id)
    }

    fn bullet_name(&self) -> String {
        self.name.clone()
    }
}

/// A user who can appear as an evidence operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub slug: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl User {
    pub fn new(
        slug: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self { slug: slug.into(), first_name: first_name.into(), last_name: last_name.into() }
    }
}

// Operators are addressed by slug in queries, so both id and name carry it.
impl AsBullet for User {
    fn bullet_id(&self) -> BulletId {
        BulletId::Text(self.slug.clone())
    }

    fn bullet_name(&self) -> String {
        self.slug.clone()
    }
}

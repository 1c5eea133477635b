//! Data models for evidence search queries.
//!
//! - [`Tag`] and [`User`] - lookup entities supplied by the caller
//! - [`BulletProps`] - the normalized shape every filter value reduces to
//! - [`FilterModified`] - a resolved entity paired with its negation flag
//! - [`EvidenceType`] - the closed set of evidence content types
//! - [`SearchOptions`] - the resolved, typed filter criteria

pub mod bullet;
pub mod entities;
pub mod evidence_type;
pub mod search;

pub use bullet::{AsBullet, BulletId, BulletProps, FilterModified, FilterModifier};
pub use entities::{Tag, User};
pub use evidence_type::EvidenceType;
pub use search::SearchOptions;

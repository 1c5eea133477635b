//! Evidence Query - the search-box query language for evidence and findings
//!
//! A single free-form line mixes plain search terms with filter clauses:
//!
//! ```text
//! foo "two words" tag:"sql injection" operator:!jdoe range:2023-01-01,2023-01-31 sort:asc
//! ```
//!
//! This library provides:
//!
//! - Tokenizing a query line into a [`ParsedQuery`] (quoting, `!` negation)
//! - Resolving it against tag/user snapshots into typed [`SearchOptions`]
//! - Serializing `SearchOptions` back into a canonical query string
//! - Loading lookup snapshots and building shareable search links
//!
//! Every query operation is total: no input string makes them fail.
//!
//! # Example
//!
//! ```
//! use evidence_query::{Tag, User, serialize, string_to_search};
//!
//! let tags = vec![Tag::new(1, "needs review", "red")];
//! let users = vec![User::new("jdoe", "Jane", "Doe")];
//!
//! let opts = string_to_search(r#"foo tag:"needs review" operator:!jdoe"#, &tags, &users);
//! assert_eq!(opts.text, "foo");
//! assert_eq!(serialize(&opts), r#"foo tag:"needs review" operator:!jdoe"#);
//! ```

pub mod catalog;
pub mod cli;
pub mod filters;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use catalog::{Catalog, load_catalog};
pub use filters::{
    ParsedQuery, ParsedToken, parse_date_range, parse_query, resolve, resolve_with_report,
    serialize, string_to_search, stringify_search,
};
pub use models::{BulletId, BulletProps, EvidenceType, FilterModifier, SearchOptions, Tag, User};

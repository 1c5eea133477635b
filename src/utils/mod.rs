pub mod environment;
pub mod links;

pub use environment::{CATALOG_ENV_VAR, CatalogSource, catalog_path};
pub use links::{SavedSearch, decode_search_link, encode_search_link};

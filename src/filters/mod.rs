pub mod ast;
pub mod dates;
pub mod parser;
pub mod resolve;
pub mod serialize;

pub use ast::{FilterField, ParsedQuery, ParsedToken};
pub use dates::parse_date_range;
pub use parser::parse_query;
pub use resolve::{ResolutionIssue, resolve, resolve_with_report, string_to_search};
pub use serialize::{serialize, stringify_search};

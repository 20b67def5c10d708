//! amexpdf-ingest: statement text acquisition and the AMEX Germany statement parser.

pub mod extract;
pub mod parsers;
pub mod types;

pub use extract::extract_page_texts;
pub use parsers::amex_de::parse_amex_de_text;
pub use types::{HeaderLine, StatementTransaction};

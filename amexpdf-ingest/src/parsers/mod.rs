//! Issuer-specific statement parsers over extracted page text.

pub mod amex_de;

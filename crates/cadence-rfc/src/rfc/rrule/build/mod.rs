//! Rule serialization (RFC 5545).
//!
//! - Serializer: structured options to a `DTSTART`/`RRULE` document with
//!   canonical rule part ordering

mod serializer;

pub use serializer::{build_rule, serialize, to_document};

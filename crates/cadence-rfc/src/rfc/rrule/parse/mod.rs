//! Serialized rule parsing (RFC 5545).
//!
//! - Lexer: content line splitting and tokenization
//! - Values: value type parsing (DATE, DATE-TIME, RECUR)
//! - Parser: rule documents and their mapping onto [`RecurrenceOptions`](super::RecurrenceOptions)

mod error;
mod lexer;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, parse_content_line, split_lines};
pub use parser::{parse_document, parse_rule};
pub use values::{parse_date, parse_datetime, parse_rrule};

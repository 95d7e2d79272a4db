//! RFC 5545 building blocks.

pub mod rrule;

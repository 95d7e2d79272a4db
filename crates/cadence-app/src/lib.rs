//! Command-line front end for building, describing and previewing rules.

pub mod cli;
pub mod error;

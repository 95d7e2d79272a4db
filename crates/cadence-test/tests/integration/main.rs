//! Integration tests across the cadence crates.

mod config_integration;
mod describe_integration;
mod rrule_integration;

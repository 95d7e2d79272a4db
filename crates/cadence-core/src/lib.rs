//! Shared configuration and error types for the cadence workspace.

pub mod config;
pub mod error;
pub mod timezone;

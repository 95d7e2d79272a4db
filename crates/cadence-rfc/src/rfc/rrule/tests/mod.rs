//! Cross-module tests for building, parsing and rendering rules.

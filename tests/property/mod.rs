//! Property-based tests for slugs and reference resolution

mod resolution;
mod slugs;

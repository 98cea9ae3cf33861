//! Single test binary entry point.
//!
//! All integration tests compile into one binary (matklad's single-binary
//! layout), so the suite links once instead of once per file.
//!
//! Structure:
//! - helpers: Shared builders and fixtures
//! - integration: Multi-component workflow tests
//! - unit: Single-component unit tests

mod helpers;

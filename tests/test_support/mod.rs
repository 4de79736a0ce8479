//! Shared helpers for the integration tests (out dirs, file fixtures).
//! Note: Must be declared with `mod test_support;` in each test file.

#![allow(unused)] // Not every test file uses every helper.

// region:    --- Modules

mod helpers;

pub use helpers::*;

pub type TestResult<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

// endregion: --- Modules

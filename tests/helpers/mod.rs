//! Test helpers module
//!
//! Shared infrastructure for the integration suites: a mock backend
//! server and wire-shape builders.

// Not every test binary uses every helper.
#![allow(dead_code)]

pub mod backend_mock;
pub mod test_data;

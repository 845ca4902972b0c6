//! Utility functions and helpers

pub mod version;

pub use version::{VERSION, get_version};

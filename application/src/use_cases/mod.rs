//! Use cases for the application layer.

pub mod analyze_wound;

//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: remote generative models attempted in fallback order

pub mod model;

//! Provider adapters for remote model invocation.

pub mod gemini;

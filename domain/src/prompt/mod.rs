//! Prompt domain
//!
//! Templates and reference material for the wound analysis request.

pub mod knowledge;
mod template;

pub use template::AnalysisPromptTemplate;

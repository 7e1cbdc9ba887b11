//! Analysis domain
//!
//! Everything that describes one wound analysis: the image payload framing,
//! the validated result shape, and the parsing of raw model responses.

pub mod entities;
pub mod image;
pub mod parsing;
pub mod validation;

pub use entities::{AnalysisResult, Severity};
pub use image::{ImageError, ImagePayload};
pub use parsing::{ResponseError, extract_json_object, parse_analysis_response};
pub use validation::{ValidationError, validate_analysis};

//! Credence Core Library
//!
//! Domain models, prompt template, and response normalization for the
//! news credibility analysis service.

pub mod analysis;
pub mod analyzer;
pub mod error;

pub use analyzer::TextAnalyzer;
pub use error::{CredenceError, CredenceResult};

//! Gemini provider for Credence.
//!
//! HTTP client for the Google Generative Language API and the production
//! [`TextAnalyzer`](credence_core::TextAnalyzer) implementation.

pub mod client;

pub use client::{GeminiAnalyzer, GeminiClient, GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

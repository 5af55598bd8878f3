//! LLM client and the AI flows built on it.
//!
//! The client wraps the Gemini `generateContent` REST endpoint; each flow is
//! a prompt template plus output handling. Flows never retry — an upstream
//! failure surfaces once as an [`AiError`] and the caller decides what to do.

pub mod client;
pub mod error;
pub mod flows;
mod prompts;

pub use client::GeminiClient;
pub use error::AiError;
pub use flows::{
    analyze_idea, analyze_trends, generate_ideas, generate_project_outline, generate_report,
    ProjectOutline, MAX_IDEAS, MIN_IDEAS,
};

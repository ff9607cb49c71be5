// Recommendation pipeline: profile -> prompt -> completion -> four sections.
// All completion calls go through llm_client — no direct OpenAI calls here.

pub mod builder;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod service;

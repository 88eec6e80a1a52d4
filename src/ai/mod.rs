pub mod config;
pub mod keywords;
pub mod ollama;
pub mod prompts;

//! Translation orchestration (verb module)
//!
//! Builds the prompt from the schema context, calls the external
//! translation backend, repairs and renders the reply, and owns the
//! fallback policy when any step fails.

mod backend;
mod error;
mod prompt;
mod translate;

pub use backend::{OllamaBackend, TranslationBackend, DEFAULT_OLLAMA_URL};
pub use error::TranslateError;
pub use prompt::build_prompt;
pub use translate::{translate_question, TranslateOptions, Translation};

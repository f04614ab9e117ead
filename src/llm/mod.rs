//! Language-model seam for SQL generation.
//!
//! The model invocation is an external collaborator: an opaque function from
//! prompt to text. This module carries the trait hosts implement, the prompt
//! assembly, and the string boundary used by UI-level callers.

pub mod prompt;

use thiserror::Error;

/// Result type for generation operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Prefix carried by the string form of a failed generation.
pub const GENERATION_ERROR_PREFIX: &str = "Error generating SQL query: ";

/// Errors surfaced by a generator implementation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The model endpoint rejected the request or could not be reached.
    #[error("model invocation failed: {0}")]
    Invocation(String),

    /// The model returned an empty or unusable completion.
    #[error("model returned no usable completion")]
    EmptyCompletion,
}

/// Opaque prompt-to-text collaborator that turns a question plus a rendered
/// schema into SQL.
pub trait SqlGenerator {
    fn generate_sql(&self, question: &str, schema: &str) -> GeneratorResult<String>;
}

/// String-boundary convenience: failures render with
/// [`GENERATION_ERROR_PREFIX`] instead of propagating.
pub fn generate_sql_text<G: SqlGenerator>(generator: &G, question: &str, schema: &str) -> String {
    match generator.generate_sql(question, schema) {
        Ok(sql) => sql,
        Err(err) => format!("{}{}", GENERATION_ERROR_PREFIX, err),
    }
}

//! Prompt assembly for the SQL-generation model.

/// System prompt: schema context plus the bare-SQL directive.
pub fn system_prompt(schema: &str) -> String {
    format!(
        "You are a SQL expert. Given the following database schema:\n{}\n\n\
         Convert the following natural language query to SQL.\n\
         Return ONLY the SQL query without any explanations.",
        schema
    )
}

/// Full prompt for single-message transports.
pub fn build_prompt(question: &str, schema: &str) -> String {
    format!("{}\n\nQuestion: {}", system_prompt(schema), question)
}

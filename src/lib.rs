pub mod formatter;
pub mod parser;
pub mod types;

// Re-export the main API
pub use formatter::{DateFormatter, default_tokens};
pub use parser::parse_template;
pub use types::{TemplateSegment, TokenResolver, TokenTable, UndefinedTokenError};

#[cfg(test)]
mod tests;

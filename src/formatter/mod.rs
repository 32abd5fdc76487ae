//! Template compilation and rendering module
//!
//! This module resolves scanned template segments against token tables and
//! renders instants through the compiled result. The main entry point is
//! the `DateFormatter` type.

mod compile;
mod defaults;

// Re-export the public interface
pub use compile::DateFormatter;
pub use defaults::default_tokens;

//! Format template scanning module
//!
//! This module is responsible for splitting a format template into literal
//! text and `{name}` token segments. The main entry point is the
//! `parse_template` function.

mod template;

pub use template::parse_template;

use std::fmt;

use chrono::NaiveDateTime;

use crate::formatter::defaults::default_tokens;
use crate::parser::parse_template;
use crate::types::{TemplateSegment, TokenResolver, TokenTable, UndefinedTokenError};

/// One element of a compiled template: literal text, or a resolver bound
/// when the formatter was built
enum CompiledSegment {
    Literal(String),
    Resolved(TokenResolver),
}

impl fmt::Debug for CompiledSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompiledSegment::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            CompiledSegment::Resolved(_) => f.write_str("Resolved(..)"),
        }
    }
}

/// A compiled date formatter
///
/// Built once from a format template, then reusable for any number of
/// instants. Every token is resolved while the formatter is being built;
/// rendering itself cannot hit an unknown token.
#[derive(Debug)]
pub struct DateFormatter {
    segments: Vec<CompiledSegment>,
}

impl DateFormatter {
    /// Compile a template against the built-in tokens only
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use date_format::DateFormatter;
    ///
    /// let formatter = DateFormatter::new("{YYYY}-{MM}-{DD}").unwrap();
    /// let instant = NaiveDate::from_ymd_opt(2017, 5, 1)
    ///     .unwrap()
    ///     .and_hms_opt(16, 30, 9)
    ///     .unwrap();
    /// assert_eq!(formatter.format(&instant), "2017-05-01");
    /// ```
    pub fn new(template: &str) -> Result<Self, UndefinedTokenError> {
        Self::with_tokens(template, &TokenTable::new())
    }

    /// Compile a template, resolving each token against `custom` first and
    /// the built-in table second
    ///
    /// Token names outside the braces are never substituted; text outside
    /// well-formed `{name}` pairs passes through unchanged.
    ///
    /// # Arguments
    /// * `template` - The format template, e.g. `"{HH}:{mm}"`
    /// * `custom` - Extra resolvers; an entry named like a built-in token
    ///   overrides it for this formatter only
    ///
    /// # Returns
    /// * `Result<DateFormatter, UndefinedTokenError>` - The compiled
    ///   formatter, or the first token name that resolved nowhere
    ///
    /// # Examples
    /// ```
    /// use chrono::{Datelike, NaiveDate};
    /// use date_format::{DateFormatter, TokenTable};
    ///
    /// let tokens = TokenTable::new()
    ///     .with("DD-3", |d| (d.day() - 3).to_string())
    ///     .with("DD+4", |d| (d.day() + 4).to_string());
    /// let formatter =
    ///     DateFormatter::with_tokens("The week from {MM}/{DD-3}-{MM}/{DD+4}", &tokens).unwrap();
    ///
    /// let instant = NaiveDate::from_ymd_opt(2000, 2, 15)
    ///     .unwrap()
    ///     .and_hms_opt(0, 0, 0)
    ///     .unwrap();
    /// assert_eq!(formatter.format(&instant), "The week from 02/12-02/19");
    /// ```
    pub fn with_tokens(template: &str, custom: &TokenTable) -> Result<Self, UndefinedTokenError> {
        let defaults = default_tokens();
        let mut segments = Vec::new();

        for segment in parse_template(template) {
            let compiled = match segment {
                TemplateSegment::Literal(text) => CompiledSegment::Literal(text),
                TemplateSegment::Token(name) => {
                    match custom.get(&name).or_else(|| defaults.get(name.as_str())) {
                        Some(resolver) => CompiledSegment::Resolved(resolver.clone()),
                        None => return Err(UndefinedTokenError { name }),
                    }
                }
            };
            segments.push(compiled);
        }

        Ok(Self { segments })
    }

    /// Render the given instant through the compiled template
    ///
    /// Walks the segments in order, emitting literals verbatim and resolver
    /// output for tokens, with no separators in between.
    pub fn format(&self, instant: &NaiveDateTime) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                CompiledSegment::Literal(text) => result.push_str(text),
                CompiledSegment::Resolved(resolver) => result.push_str(&resolver(instant)),
            }
        }

        result
    }
}

use winnow::combinator::{alt, delimited};
use winnow::error::ErrMode;
use winnow::token::{any, take_till};
use winnow::{ModalResult, Parser};

use crate::types::TemplateSegment;

/// Parse one `{name}` token
///
/// Only a well-formed, non-nested pair counts; the name is everything
/// strictly between the braces and may not contain `{` or `}`.
pub fn parse_token(input: &mut &str) -> ModalResult<TemplateSegment> {
    delimited('{', take_till(0.., ['{', '}']), '}')
        .map(|name: &str| TemplateSegment::Token(name.to_string()))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Parse a run of literal text up to the next candidate token start
pub fn parse_literal_run(input: &mut &str) -> ModalResult<TemplateSegment> {
    take_till(1.., '{')
        .map(|text: &str| TemplateSegment::Literal(text.to_string()))
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

fn parse_segment(input: &mut &str) -> ModalResult<TemplateSegment> {
    alt((
        parse_token,
        parse_literal_run,
        // an open brace with no matching close brace falls through as text
        any.map(|c: char| TemplateSegment::Literal(c.to_string())),
    ))
    .parse_next(input)
}

/// Scan a format template into literal and token segments
///
/// The scan is total: every character of the template lands in exactly one
/// segment, and text outside well-formed `{name}` pairs (including stray
/// braces) is kept as literal output. Adjacent literal pieces are merged.
///
/// # Examples
/// ```
/// use date_format::parser::parse_template;
/// use date_format::types::TemplateSegment;
///
/// let segments = parse_template("{MM}DD{YY}");
/// assert_eq!(
///     segments,
///     vec![
///         TemplateSegment::Token("MM".to_string()),
///         TemplateSegment::Literal("DD".to_string()),
///         TemplateSegment::Token("YY".to_string()),
///     ]
/// );
/// ```
pub fn parse_template(template: &str) -> Vec<TemplateSegment> {
    let mut input = template;
    let mut segments: Vec<TemplateSegment> = Vec::new();

    while !input.is_empty() {
        let Ok(segment) = parse_segment(&mut input) else {
            // unreachable: the single-character fallback accepts any input
            break;
        };
        match segment {
            TemplateSegment::Literal(text) => {
                // stray braces scan one character at a time; fold them into
                // the surrounding literal run
                if let Some(TemplateSegment::Literal(run)) = segments.last_mut() {
                    run.push_str(&text);
                } else {
                    segments.push(TemplateSegment::Literal(text));
                }
            }
            token @ TemplateSegment::Token(_) => segments.push(token),
        }
    }

    segments
}

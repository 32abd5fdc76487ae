use crate::parser::*;
use crate::types::*;

fn literal(text: &str) -> TemplateSegment {
    TemplateSegment::Literal(text.to_string())
}

fn token(name: &str) -> TemplateSegment {
    TemplateSegment::Token(name.to_string())
}

#[test]
fn test_empty_template() {
    assert_eq!(parse_template(""), Vec::<TemplateSegment>::new());
}

#[test]
fn test_plain_text_is_one_literal() {
    assert_eq!(parse_template("foo"), vec![literal("foo")]);
}

#[test]
fn test_single_token() {
    assert_eq!(parse_template("{MM}"), vec![token("MM")]);
}

#[test]
fn test_unbraced_name_stays_literal() {
    assert_eq!(parse_template("HH"), vec![literal("HH")]);
}

#[test]
fn test_tokens_and_literals_interleave() {
    assert_eq!(
        parse_template("{MM}DD{YY}"),
        vec![token("MM"), literal("DD"), token("YY")]
    );
}

#[test]
fn test_literal_prefix_and_suffix_preserved() {
    assert_eq!(
        parse_template("[{HH}:{mm}:{ss}]"),
        vec![
            literal("["),
            token("HH"),
            literal(":"),
            token("mm"),
            literal(":"),
            token("ss"),
            literal("]"),
        ]
    );
}

#[test]
fn test_token_name_with_punctuation() {
    assert_eq!(
        parse_template("{DD-3} {DD+4}"),
        vec![token("DD-3"), literal(" "), token("DD+4")]
    );
}

#[test]
fn test_empty_token_name() {
    assert_eq!(parse_template("{}"), vec![token("")]);
}

#[test]
fn test_lone_open_brace_is_literal() {
    assert_eq!(parse_template("{"), vec![literal("{")]);
    assert_eq!(parse_template("a{b"), vec![literal("a{b")]);
}

#[test]
fn test_lone_close_brace_is_literal() {
    assert_eq!(parse_template("}"), vec![literal("}")]);
    assert_eq!(parse_template("a}b"), vec![literal("a}b")]);
}

#[test]
fn test_doubled_braces_keep_inner_token() {
    assert_eq!(
        parse_template("{{X}}"),
        vec![literal("{"), token("X"), literal("}")]
    );
}

#[test]
fn test_unclosed_brace_before_valid_token() {
    assert_eq!(parse_template("{a{b}"), vec![literal("{a"), token("b")]);
}

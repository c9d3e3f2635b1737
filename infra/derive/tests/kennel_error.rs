use kennel_derive::kennel_error;
use std::borrow::Cow;

#[kennel_error]
pub enum LookupError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("No entry with number {number}{}", format_context(.context))]
    NotFound { number: i64, context: Option<Cow<'static, str>> },

    #[error("Internal lookup error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn lookup(number: i64) -> Result<i64, LookupError> {
    Err(LookupError::NotFound { number, context: None })
}

#[test]
fn kennel_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/kennel_error_pass.rs");
}

#[test]
fn context_is_rendered_after_the_prefix() {
    let err = lookup(7).context("looking up").unwrap_err();
    assert_eq!(err.to_string(), "No entry with number 7 (looking up)");
}

#[test]
fn errors_without_context_render_bare() {
    let err = lookup(999).unwrap_err();
    assert_eq!(err.to_string(), "No entry with number 999");
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn parse(raw: &str) -> Result<i64, LookupError> {
        Ok(raw.parse::<i64>()?)
    }

    let err = parse("woof").unwrap_err();
    assert!(matches!(err, LookupError::Parse { context: None, .. }));
}

#[test]
fn source_results_gain_context_directly() {
    let err = "woof".parse::<i64>().context("reading handle").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (reading handle): "));
}

#[test]
fn strings_become_internal_errors() {
    let from_str: LookupError = "boom".into();
    let from_string: LookupError = String::from("bang").into();

    assert_eq!(from_str.to_string(), "Internal lookup error: boom");
    assert!(matches!(from_string, LookupError::Internal { message, .. } if message == "bang"));
}

use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {reason}", format_context(.context))]
    Rejected { reason: &'static str, context: Option<Cow<'static, str>> },

    #[error("Busy")]
    Busy,

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk gone"))
}

#[test]
fn folio_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/folio_error_pass.rs");
}

#[test]
fn question_mark_converts_source() {
    fn run() -> Result<(), DemoError> {
        failing_io()?;
        Ok(())
    }

    let err = run().unwrap_err();
    assert!(matches!(err, DemoError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO error: disk gone");
}

#[test]
fn context_on_source_result() {
    let err = failing_io().context("Reading profile").unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading profile): disk gone");
}

#[test]
fn context_on_own_result_overrides_slot() {
    let result: Result<(), DemoError> =
        Err(DemoError::Rejected { reason: "blank name", context: None });
    let err = result.context("Validating form").unwrap_err();
    assert_eq!(err.to_string(), "Rejected (Validating form): blank name");
}

#[test]
fn context_is_ignored_for_variants_without_slot() {
    let result: Result<(), DemoError> = Err(DemoError::Busy);
    let err = result.context("ignored").unwrap_err();
    assert_eq!(err.to_string(), "Busy");
}

#[test]
fn strings_become_internal() {
    let borrowed = DemoError::from("static message");
    assert!(matches!(borrowed, DemoError::Internal { message: Cow::Borrowed(_), .. }));

    let owned = DemoError::from(format!("owned {}", 42));
    assert_eq!(owned.to_string(), "Internal error: owned 42");
}

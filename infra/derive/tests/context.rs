use geofeed_derive::geofeed_error;
use std::borrow::Cow;

#[geofeed_error]
pub enum LoadError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn missing_file() -> Result<String, std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "geofeed.toml"))
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn load() -> Result<String, LoadError> {
        Ok(missing_file()?)
    }

    let err = load().expect_err("missing file should fail");
    assert!(matches!(err, LoadError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO error: geofeed.toml");
}

#[test]
fn context_is_attached_to_source_results() {
    let err = missing_file().context("Reading configuration").expect_err("should fail");
    assert_eq!(err.to_string(), "IO error (Reading configuration): geofeed.toml");
}

#[test]
fn context_replaces_existing_context() {
    let first: Result<(), LoadError> = Err("bad state".into());
    let err = first.context("Second pass").expect_err("should fail");
    assert_eq!(err.to_string(), "Internal error (Second pass): bad state");
}

#[test]
fn internal_accepts_owned_strings() {
    let err = LoadError::from(format!("code {}", 7));
    assert!(matches!(err, LoadError::Internal { ref message, .. } if message == "code 7"));
}

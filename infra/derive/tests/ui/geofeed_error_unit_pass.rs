use geofeed_derive::geofeed_error;

#[geofeed_error]
#[derive(Clone, PartialEq)]
pub enum FieldError {
    #[error("Field is empty")]
    Empty,

    #[error("Expected 2 fields, got {count}")]
    Count { count: usize },
}

fn main() {
    assert_eq!(FieldError::Empty.to_string(), "Field is empty");
    assert_eq!(FieldError::Count { count: 3 }, FieldError::Count { count: 3 });
}

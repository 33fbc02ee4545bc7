pub mod lists;
pub mod todos;

use serde::Serialize;

/// Success body for operations that return nothing but the flag.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub error: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { error: false }
    }
}

// Empty strings count as "not provided"; whitespace does not.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

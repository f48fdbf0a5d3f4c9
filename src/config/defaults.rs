use crate::markdown::toc::{DEFAULT_TITLE, DEFAULT_WRAPPER_ID};

/// Default title of the table of contents section
pub fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Default identifier of the wrapping container
pub fn default_wrapper_id() -> String {
    DEFAULT_WRAPPER_ID.to_string()
}

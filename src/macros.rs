/// Creates an error whose text is formatted with `format!`.
///
/// The text is rendered eagerly, when the error is created.
///
/// # Examples
///
/// ```
/// # use httperr::errorf;
/// # use http::StatusCode;
/// let id = 42;
/// let err = errorf!(StatusCode::NOT_FOUND, "user {} does not exist", id);
/// assert_eq!(err.to_string(), "404: user 42 does not exist");
/// ```
#[macro_export]
macro_rules! errorf {
    ($status:expr, $($arg:tt)+) => {
        $crate::error::error_text($status, format!($($arg)+))
    };
}

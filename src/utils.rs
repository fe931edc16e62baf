use crate::ClientError;

/// Checks that `value` can be used as a single URL path segment.
///
/// `.` and `..` are rejected too, as URL path handling drops them and the
/// segments after them would shift into their place.
///
/// # Errors
/// - `InvalidArgument` if `value` contains a `/`, or is `.` or `..`
pub(crate) fn path_segment<'a>(
    argument: &'static str,
    value: &'a str,
) -> Result<&'a str, ClientError> {
    if value.contains('/') || matches!(value, "." | "..") {
        return Err(ClientError::InvalidArgument {
            argument,
            value: value.to_string(),
        });
    }

    Ok(value)
}

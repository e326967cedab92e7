// Validation utilities

/// Check that a trimmed field is present
pub fn validate_required(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("This field is required.".to_string())
    } else {
        None
    }
}

/// Check that a field fits in `max_len` characters
pub fn validate_max_length(value: &str, max_len: usize) -> Option<String> {
    let len = value.chars().count();
    if len > max_len {
        Some(format!(
            "Ensure this value has at most {max_len} characters (it has {len})."
        ))
    } else {
        None
    }
}

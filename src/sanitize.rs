use regex::Regex;
use std::sync::OnceLock;

/// Characters that are invalid in file names on at least one platform.
const INVALID_CHARS: &str = r#"[\\/:*?"<>|]"#;

fn invalid_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(INVALID_CHARS).unwrap())
}

/// Sanitize a string for use as a file name.
///
/// Reserved characters and spaces are replaced with `replacement`; the
/// result is truncated to `max_length` characters when given. Collisions
/// between two titles that sanitize to the same name are not detected.
pub fn sanitize_file_name(input: &str, replacement: &str, max_length: Option<usize>) -> String {
    let sanitized = invalid_chars().replace_all(input, replacement);
    let sanitized = sanitized.replace(' ', replacement);

    match max_length {
        Some(max) if sanitized.chars().count() > max => sanitized.chars().take(max).collect(),
        _ => sanitized,
    }
}

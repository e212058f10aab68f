//! Keeps registrar response bodies (which carry contact details) short in logs.

/// Maximum number of bytes of a body that make it into a log line.
const TRUNCATE_LIMIT: usize = 256;

/// Truncates `s` to at most [`TRUNCATE_LIMIT`] bytes on a char boundary, appending the
/// original length when anything was cut.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

const MAX_VISIBLE_CHARS: usize = 100;

const SECRET_MARKERS: [&str; 7] = [
    "Bearer ",
    "api_key=",
    "token=",
    "secret=",
    "password=",
    "Signature=",
    "OSSAccessKeyId=",
];

/// Shortens user-supplied URLs and model output for logs and masks
/// credentials embedded in them (signed object-storage URLs, tokens).
pub fn sanitize_for_log(value: &str) -> String {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = redact_secrets(trimmed);

    match redacted.char_indices().nth(MAX_VISIBLE_CHARS) {
        Some((cut, _)) => format!(
            "{}... ({} chars total)",
            &redacted[..cut],
            redacted.chars().count()
        ),
        None => redacted,
    }
}

fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();

    for marker in SECRET_MARKERS {
        let mut search_from = 0;
        while let Some(offset) = result[search_from..].find(marker) {
            let value_start = search_from + offset + marker.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\''))
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(value_start..value_end, "[REDACTED]");
            search_from = value_start + "[REDACTED]".len();
        }
    }

    result
}

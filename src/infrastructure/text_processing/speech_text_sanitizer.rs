use regex::Regex;
use std::sync::LazyLock;

pub const MAX_SPEECH_CHARS: usize = 500;
pub const TRUNCATION_MARKER: &str = "...";

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
// Whitespace controls (\t \n \x0B \x0C \r) are left for WHITESPACE_RUN.
static CONTROL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x00-\x08\x0E-\x1F\x7F]").unwrap());

/// Flattens model output into a single line the TTS provider accepts.
///
/// Control characters are dropped, whitespace runs (newlines included) become
/// one space, and anything past [`MAX_SPEECH_CHARS`] characters
/// is cut and marked with [`TRUNCATION_MARKER`].
pub fn sanitize_speech_text(raw: &str) -> String {
    let stripped = CONTROL_CHARS.replace_all(raw, "");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    let trimmed = collapsed.trim();

    match trimmed.char_indices().nth(MAX_SPEECH_CHARS) {
        Some((cut, _)) => {
            tracing::info!(
                original_chars = trimmed.chars().count(),
                "Speech text truncated to {MAX_SPEECH_CHARS} characters"
            );
            format!("{}{TRUNCATION_MARKER}", &trimmed[..cut])
        }
        None => trimmed.to_string(),
    }
}

mod speech_text_sanitizer;

pub use speech_text_sanitizer::{MAX_SPEECH_CHARS, TRUNCATION_MARKER, sanitize_speech_text};

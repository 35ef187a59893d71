const MIN_AUDIO_BYTES: usize = 8;
const PLAUSIBLE_MIN_BYTES: usize = 1024;
const PLAUSIBLE_MAX_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioSignature {
    Wav,
    MpegFrame,
    Id3,
    /// No known header, accepted on size alone.
    Unrecognized,
}

/// Identifies the container of a TTS response body.
///
/// Returns `None` when the bytes are neither a known audio header nor of a
/// plausible audio size (over 1 KiB, under 10 MiB).
pub fn sniff_audio(data: &[u8]) -> Option<AudioSignature> {
    if data.len() < MIN_AUDIO_BYTES {
        return None;
    }

    if data.starts_with(b"RIFF") {
        return Some(AudioSignature::Wav);
    }

    if data[0] == 0xFF && data[1] & 0xE0 == 0xE0 {
        return Some(AudioSignature::MpegFrame);
    }

    if data.starts_with(b"ID3") {
        return Some(AudioSignature::Id3);
    }

    if data.len() > PLAUSIBLE_MIN_BYTES && data.len() < PLAUSIBLE_MAX_BYTES {
        return Some(AudioSignature::Unrecognized);
    }

    None
}

pub fn is_valid_audio(data: &[u8]) -> bool {
    sniff_audio(data).is_some()
}

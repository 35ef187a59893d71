use image_narrator::domain::{FALLBACK_WAV_SPEC, WavSpec, WavSpecError, fallback_wav, silent_wav};

fn read_u32_le(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes(bytes[at..at + 4].try_into().unwrap())
}

fn read_u16_le(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes(bytes[at..at + 2].try_into().unwrap())
}

#[test]
fn given_fallback_spec_when_building_wav_then_length_is_header_plus_two_seconds_of_samples() {
    let wav = fallback_wav();

    assert_eq!(wav.len(), 44 + 16_000 * 2 * 2);
    assert_eq!(wav.len(), 64_044);
}

#[test]
fn given_fallback_wav_when_inspecting_header_then_declares_riff_wave_container() {
    let wav = fallback_wav();

    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(&wav[36..40], b"data");
}

#[test]
fn given_fallback_wav_when_reading_size_fields_then_they_match_total_length() {
    let wav = fallback_wav();
    let total = wav.len() as u32;

    assert_eq!(read_u32_le(&wav, 4), total - 8);
    assert_eq!(read_u32_le(&wav, 40), total - 44);
}

#[test]
fn given_fallback_wav_when_reading_fmt_chunk_then_describes_16khz_mono_16bit_pcm() {
    let wav = fallback_wav();

    assert_eq!(read_u32_le(&wav, 16), 16);
    assert_eq!(read_u16_le(&wav, 20), 1);
    assert_eq!(read_u16_le(&wav, 22), 1);
    assert_eq!(read_u32_le(&wav, 24), 16_000);
    assert_eq!(read_u32_le(&wav, 28), 32_000);
    assert_eq!(read_u16_le(&wav, 32), 2);
    assert_eq!(read_u16_le(&wav, 34), 16);
}

#[test]
fn given_fallback_wav_when_reading_samples_then_all_are_silent() {
    let wav = fallback_wav();

    assert!(wav[44..].iter().all(|&b| b == 0));
}

#[test]
fn given_stereo_spec_when_building_wav_then_data_size_scales_with_channels() {
    let spec = WavSpec::new(8_000, 2, 16, 1).unwrap();

    let wav = silent_wav(spec);

    assert_eq!(spec.block_align(), 4);
    assert_eq!(read_u32_le(&wav, 40), 32_000);
    assert_eq!(wav.len(), 44 + 32_000);
}

#[test]
fn given_fallback_spec_constant_when_inspected_then_matches_documented_parameters() {
    assert_eq!(FALLBACK_WAV_SPEC.sample_rate(), 16_000);
    assert_eq!(FALLBACK_WAV_SPEC.channels(), 1);
    assert_eq!(FALLBACK_WAV_SPEC.bits_per_sample(), 16);
    assert_eq!(FALLBACK_WAV_SPEC.duration_secs(), 2);
}

#[test]
fn given_fallback_parameters_when_validating_then_accepts_same_spec() {
    assert_eq!(WavSpec::new(16_000, 1, 16, 2), Ok(FALLBACK_WAV_SPEC));
}

#[test]
fn given_long_high_rate_recording_when_validating_then_rejects_oversized_data() {
    let result = WavSpec::new(192_000, 8, 32, 3_600);

    assert_eq!(result, Err(WavSpecError::TooLarge));
}

#[test]
fn given_byte_rate_beyond_u32_when_validating_then_rejects_even_with_zero_duration() {
    let result = WavSpec::new(u32::MAX, 2, 16, 0);

    assert_eq!(result, Err(WavSpecError::TooLarge));
}

#[test]
fn given_block_align_beyond_u16_when_validating_then_rejects() {
    let result = WavSpec::new(1, u16::MAX, 16, 1);

    assert_eq!(result, Err(WavSpecError::TooLarge));
}

#[test]
fn given_degenerate_layout_when_validating_then_names_the_bad_field() {
    assert_eq!(WavSpec::new(16_000, 0, 16, 1), Err(WavSpecError::NoChannels));
    assert_eq!(
        WavSpec::new(16_000, 1, 12, 1),
        Err(WavSpecError::BitsPerSample(12))
    );
}

use image_narrator::infrastructure::audio::{AudioSignature, is_valid_audio, sniff_audio};

#[test]
fn given_riff_header_when_sniffing_then_detects_wav() {
    let mut data = b"RIFF".to_vec();
    data.resize(16, 0);

    assert_eq!(sniff_audio(&data), Some(AudioSignature::Wav));
}

#[test]
fn given_mpeg_frame_sync_when_sniffing_then_detects_mpeg() {
    let mut data = vec![0xFF, 0xFB, 0x90, 0x64];
    data.resize(16, 0);

    assert_eq!(sniff_audio(&data), Some(AudioSignature::MpegFrame));
}

#[test]
fn given_id3_tag_when_sniffing_then_detects_id3() {
    let mut data = b"ID3".to_vec();
    data.resize(16, 0);

    assert_eq!(sniff_audio(&data), Some(AudioSignature::Id3));
}

#[test]
fn given_500_unrecognized_bytes_when_validating_then_rejects() {
    let data = vec![b'x'; 500];

    assert!(!is_valid_audio(&data));
}

#[test]
fn given_2000_unrecognized_bytes_when_validating_then_accepts_on_size() {
    let data = vec![b'x'; 2000];

    assert_eq!(sniff_audio(&data), Some(AudioSignature::Unrecognized));
    assert!(is_valid_audio(&data));
}

#[test]
fn given_fewer_than_eight_bytes_when_validating_then_rejects_even_with_riff_prefix() {
    assert!(!is_valid_audio(b"RIFF"));
    assert!(!is_valid_audio(&[]));
}

#[test]
fn given_exactly_one_kib_unrecognized_when_validating_then_rejects() {
    let data = vec![b'x'; 1024];

    assert!(!is_valid_audio(&data));
}

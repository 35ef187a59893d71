mod aliyun_tts_client;
mod audio_sniffer;

pub use aliyun_tts_client::AliyunTtsClient;
pub use audio_sniffer::{AudioSignature, is_valid_audio, sniff_audio};

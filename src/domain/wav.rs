pub const WAV_HEADER_LEN: usize = 44;

/// Bytes between the RIFF size field and the end of the header.
const RIFF_HEADER_TAIL: u64 = 36;

/// PCM layout of a WAV container.
///
/// Only obtainable through [`WavSpec::new`] or [`FALLBACK_WAV_SPEC`], so every
/// derived header field is known to fit its on-disk width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    sample_rate: u32,
    channels: u16,
    bits_per_sample: u16,
    duration_secs: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WavSpecError {
    #[error("channel count must be non-zero")]
    NoChannels,
    #[error("bits per sample must be a non-zero multiple of 8, got {0}")]
    BitsPerSample(u16),
    #[error("layout does not fit the 32-bit WAV header fields")]
    TooLarge,
}

/// Two seconds of 16 kHz mono 16-bit silence, served when speech synthesis fails.
pub const FALLBACK_WAV_SPEC: WavSpec = WavSpec {
    sample_rate: 16_000,
    channels: 1,
    bits_per_sample: 16,
    duration_secs: 2,
};

impl WavSpec {
    pub fn new(
        sample_rate: u32,
        channels: u16,
        bits_per_sample: u16,
        duration_secs: u32,
    ) -> Result<Self, WavSpecError> {
        if channels == 0 {
            return Err(WavSpecError::NoChannels);
        }
        if bits_per_sample == 0 || bits_per_sample % 8 != 0 {
            return Err(WavSpecError::BitsPerSample(bits_per_sample));
        }

        let block_align = u64::from(channels) * u64::from(bits_per_sample / 8);
        let byte_rate = u64::from(sample_rate) * block_align;
        let data_len = byte_rate * u64::from(duration_secs);

        if block_align > u64::from(u16::MAX)
            || byte_rate > u64::from(u32::MAX)
            || data_len + RIFF_HEADER_TAIL > u64::from(u32::MAX)
        {
            return Err(WavSpecError::TooLarge);
        }

        Ok(Self {
            sample_rate,
            channels,
            bits_per_sample,
            duration_secs,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }

    pub fn data_len(&self) -> u32 {
        self.byte_rate() * self.duration_secs
    }
}

/// Builds a complete WAV file whose samples are all zero.
pub fn silent_wav(spec: WavSpec) -> Vec<u8> {
    let data_size = spec.data_len();
    let file_size = RIFF_HEADER_TAIL as u32 + data_size;

    let mut wav = Vec::with_capacity(WAV_HEADER_LEN + data_size as usize);

    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&spec.channels.to_le_bytes());
    wav.extend_from_slice(&spec.sample_rate.to_le_bytes());
    wav.extend_from_slice(&spec.byte_rate().to_le_bytes());
    wav.extend_from_slice(&spec.block_align().to_le_bytes());
    wav.extend_from_slice(&spec.bits_per_sample.to_le_bytes());

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());

    wav.resize(WAV_HEADER_LEN + data_size as usize, 0);
    wav
}

pub fn fallback_wav() -> Vec<u8> {
    silent_wav(FALLBACK_WAV_SPEC)
}

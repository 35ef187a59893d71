/// Audio handed back by the speech step, tagged with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechOutcome {
    Synthesized(Vec<u8>),
    Fallback(Vec<u8>),
}

impl SpeechOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Synthesized(bytes) | Self::Fallback(bytes) => bytes,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Self::Synthesized(bytes) | Self::Fallback(bytes) => bytes,
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Self::Synthesized(_) => "synthesized",
            Self::Fallback(_) => "fallback",
        }
    }
}

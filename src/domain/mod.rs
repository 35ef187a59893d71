mod analysis_result;
mod image_url;
mod speech_outcome;
pub mod wav;

pub use analysis_result::{AnalysisResult, AudioFormat};
pub use image_url::{BlankImageUrl, ImageUrl};
pub use speech_outcome::SpeechOutcome;
pub use wav::{FALLBACK_WAV_SPEC, WavSpec, WavSpecError, fallback_wav, silent_wav};

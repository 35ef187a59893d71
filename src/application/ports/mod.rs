mod image_fetcher;
mod speech_synthesizer;
mod vision_client;

pub use image_fetcher::{ImageFetchError, ImageFetcher};
pub use speech_synthesizer::{SpeechError, SpeechSynthesizer};
pub use vision_client::{VisionClient, VisionError};

//! Piper voice models on ONNX Runtime.
//!
//! Binds the engine capabilities to Piper: JSON voice configs, phoneme-id
//! encoding, ONNX inference and execution-provider discovery.

mod config;
mod phonemes;
mod providers;
mod voice;

pub use config::{AudioConfig, EspeakConfig, InferenceConfig, PhonemeType, PiperConfig};
pub use phonemes::{phoneme_ids, phonemize, split_sentences};
pub use providers::OrtProviders;
pub use voice::{PiperSynthesizer, PiperVoice, to_pcm16};

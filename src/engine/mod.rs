//! TTS Engine orchestrator.
//!
//! This module defines the capabilities the engine consumes (voice
//! synthesis, execution-provider discovery, audio writing) and the
//! engine that validates a request and drives them.

mod tts;
mod types;

use std::path::Path;

pub use tts::{GPU_FALLBACK_WARNING, RunError, SynthesisOutcome, TTSEngine};
pub use types::{AudioError, Provider, VoiceError};

/// Loads voice models.
#[cfg_attr(test, mockall::automock)]
pub trait VoiceSynthesizer {
    /// Load the voice at `model_path` configured by `config_path`.
    ///
    /// `use_gpu` selects the GPU execution provider.
    fn load_voice(
        &self,
        model_path: &Path,
        config_path: &Path,
        use_gpu: bool,
    ) -> Result<Box<dyn Voice>, VoiceError>;
}

/// A loaded voice model.
#[cfg_attr(test, mockall::automock)]
pub trait Voice {
    /// Sample rate declared by the voice config.
    fn sample_rate(&self) -> u32;

    /// Synthesize `text` into 16-bit mono samples.
    fn synthesize(&mut self, text: &str) -> Result<Vec<i16>, VoiceError>;
}

/// Reports the execution providers the inference runtime can use.
#[cfg_attr(test, mockall::automock)]
pub trait ProviderQuery {
    fn available_providers(&self) -> Vec<Provider>;
}

/// Writes audio samples to a file.
#[cfg_attr(test, mockall::automock)]
pub trait AudioWriter {
    fn write(&self, path: &Path, samples: &[i16], sample_rate: u32) -> Result<(), AudioError>;
}

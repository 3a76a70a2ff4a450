//! Engine collaborator types.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a voice synthesizer while loading or running a voice.
#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("Failed to read voice config {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid voice config {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Phonemization failed: {0}")]
    Phonemize(String),

    #[error("Failed to load model: {0}")]
    ModelLoad(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}

/// Errors raised while writing synthesized audio.
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("WAV encoding failed: {0}")]
    Wav(String),
}

/// Hardware backend reported by the inference runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Cpu,
    Cuda,
}

impl Provider {
    /// Returns the ONNX Runtime name of this execution provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Cpu => "CPUExecutionProvider",
            Provider::Cuda => "CUDAExecutionProvider",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

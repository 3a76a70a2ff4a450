//! TTS Engine implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::types::{AudioError, Provider, VoiceError};
use super::{AudioWriter, ProviderQuery, VoiceSynthesizer};
use crate::cli::Device;
use crate::resolver::{self, RequestInput, ResolveError, SynthesisRequest};

/// Line written when a GPU run is downgraded to CPU.
pub const GPU_FALLBACK_WARNING: &str =
    "warning: GPU execution provider not available, falling back to CPU";

/// Errors that can occur during a run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Voice(#[from] VoiceError),

    #[error(transparent)]
    Audio(#[from] AudioError),

    #[error("Failed to emit warning: {0}")]
    Io(#[from] std::io::Error),
}

/// Summary of a completed synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisOutcome {
    pub output_path: PathBuf,
    pub device: Device,
    pub sample_rate: u32,
    pub samples: usize,
}

/// The engine that validates requests and drives the collaborators.
pub struct TTSEngine<S, P, W> {
    synthesizer: S,
    providers: P,
    writer: W,
}

impl<S, P, W> TTSEngine<S, P, W>
where
    S: VoiceSynthesizer,
    P: ProviderQuery,
    W: AudioWriter,
{
    /// Create a new TTS engine.
    pub fn new(synthesizer: S, providers: P, writer: W) -> Self {
        Self {
            synthesizer,
            providers,
            writer,
        }
    }

    /// List voice models under `dir`.
    pub fn list_models(&self, dir: Option<&Path>) -> Result<Vec<PathBuf>, RunError> {
        Ok(resolver::list_models(dir)?)
    }

    /// Validate `input`, pick the device and synthesize to the output path.
    ///
    /// A GPU request without a GPU provider is downgraded to CPU and
    /// [`GPU_FALLBACK_WARNING`] is written to `warnings`.
    pub fn validate_and_run(
        &self,
        input: RequestInput,
        warnings: &mut impl Write,
    ) -> Result<SynthesisOutcome, RunError> {
        let mut request = SynthesisRequest::resolve(input)?;

        if request.device.is_gpu() && !self.gpu_available() {
            writeln!(warnings, "{GPU_FALLBACK_WARNING}")?;
            request = request.with_device(Device::Cpu);
        }

        self.synthesize(&request)
    }

    fn gpu_available(&self) -> bool {
        let providers = self.providers.available_providers();
        debug!(?providers, "available execution providers");
        providers.contains(&Provider::Cuda)
    }

    fn synthesize(&self, request: &SynthesisRequest) -> Result<SynthesisOutcome, RunError> {
        info!(
            model = %request.model_path.display(),
            device = %request.device,
            "loading voice"
        );
        let mut voice = self.synthesizer.load_voice(
            &request.model_path,
            &request.config_path,
            request.device.is_gpu(),
        )?;

        let audio = voice.synthesize(&request.text)?;
        let sample_rate = voice.sample_rate();
        info!(samples = audio.len(), sample_rate, "synthesized audio");

        self.writer.write(&request.output_path, &audio, sample_rate)?;

        Ok(SynthesisOutcome {
            output_path: request.output_path.clone(),
            device: request.device,
            sample_rate,
            samples: audio.len(),
        })
    }
}

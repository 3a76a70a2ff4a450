//! Piper voices running on ONNX Runtime.

use std::path::Path;

use ort::session::Session;
use ort::session::builder::SessionBuilder;
use ort::value::Tensor;
use tracing::{debug, info};

use super::config::PiperConfig;
use super::phonemes::{phoneme_ids, phonemize};
use crate::engine::{Voice, VoiceError, VoiceSynthesizer};

/// Speaker used for multi-speaker voices.
const DEFAULT_SPEAKER_ID: i64 = 0;

/// Loads Piper voices into ONNX Runtime sessions.
#[derive(Debug, Default, Clone, Copy)]
pub struct PiperSynthesizer;

impl PiperSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

impl VoiceSynthesizer for PiperSynthesizer {
    fn load_voice(
        &self,
        model_path: &Path,
        config_path: &Path,
        use_gpu: bool,
    ) -> Result<Box<dyn Voice>, VoiceError> {
        let voice = PiperVoice::load(model_path, config_path, use_gpu)?;
        Ok(Box::new(voice))
    }
}

/// A Piper voice model with its config.
pub struct PiperVoice {
    session: Session,
    config: PiperConfig,
}

impl PiperVoice {
    /// Load a voice model and config from disk.
    pub fn load(model_path: &Path, config_path: &Path, use_gpu: bool) -> Result<Self, VoiceError> {
        let config = PiperConfig::from_file(config_path)?;
        let session = session_builder(use_gpu)?
            .commit_from_file(model_path)
            .map_err(model_load)?;

        info!(
            sample_rate = config.audio.sample_rate,
            speakers = config.num_speakers,
            "voice loaded"
        );
        Ok(Self { session, config })
    }

    fn infer(&mut self, ids: Vec<i64>) -> Result<Vec<f32>, VoiceError> {
        let len = ids.len();
        let input = Tensor::from_array(([1, len], ids)).map_err(inference)?;
        let input_lengths = Tensor::from_array(([1usize], vec![len as i64])).map_err(inference)?;
        let scales = self.config.inference.as_array().to_vec();
        let scales = Tensor::from_array(([scales.len()], scales)).map_err(inference)?;

        let result = if self.config.is_multi_speaker() {
            let sid = Tensor::from_array(([1usize], vec![DEFAULT_SPEAKER_ID])).map_err(inference)?;
            self.session.run(ort::inputs![
                "input" => input,
                "input_lengths" => input_lengths,
                "scales" => scales,
                "sid" => sid
            ])
        } else {
            self.session.run(ort::inputs![
                "input" => input,
                "input_lengths" => input_lengths,
                "scales" => scales
            ])
        };
        let outputs = result.map_err(inference)?;

        let output = outputs
            .get("output")
            .ok_or_else(|| VoiceError::Inference("missing output 'output'".to_string()))?;
        let (_, audio) = output.try_extract_tensor::<f32>().map_err(inference)?;
        Ok(audio.to_vec())
    }
}

impl Voice for PiperVoice {
    fn sample_rate(&self) -> u32 {
        self.config.audio.sample_rate
    }

    fn synthesize(&mut self, text: &str) -> Result<Vec<i16>, VoiceError> {
        let sentences = phonemize(text, &self.config)?;
        let mut audio = Vec::new();

        for phonemes in sentences {
            let ids = phoneme_ids(&phonemes, &self.config.phoneme_id_map);
            debug!(phonemes = phonemes.len(), ids = ids.len(), "running sentence");
            let raw = self.infer(ids)?;
            audio.extend(to_pcm16(&raw));
        }

        Ok(audio)
    }
}

/// Peak-normalize float audio to 16-bit PCM.
pub fn to_pcm16(audio: &[f32]) -> Vec<i16> {
    let peak = audio.iter().fold(0.0f32, |max, x| max.max(x.abs())).max(0.01);
    let scale = f32::from(i16::MAX) / peak;
    let limit = f32::from(i16::MAX);

    audio
        .iter()
        .map(|x| (x * scale).clamp(-limit, limit) as i16)
        .collect()
}

fn session_builder(use_gpu: bool) -> Result<SessionBuilder, VoiceError> {
    let builder = Session::builder().map_err(model_load)?;
    if !use_gpu {
        return Ok(builder);
    }

    #[cfg(feature = "cuda")]
    {
        use ort::execution_providers::CUDAExecutionProvider;
        builder
            .with_execution_providers([CUDAExecutionProvider::default().build()])
            .map_err(model_load)
    }
    #[cfg(not(feature = "cuda"))]
    {
        tracing::warn!("built without CUDA support, loading voice on CPU");
        Ok(builder)
    }
}

fn model_load(err: impl std::fmt::Display) -> VoiceError {
    VoiceError::ModelLoad(err.to_string())
}

fn inference(err: impl std::fmt::Display) -> VoiceError {
    VoiceError::Inference(err.to_string())
}

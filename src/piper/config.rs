//! Piper voice configuration (`<voice>.onnx.json`).

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::engine::VoiceError;

/// Voice configuration shipped next to a Piper model.
#[derive(Debug, Clone, Deserialize)]
pub struct PiperConfig {
    pub audio: AudioConfig,
    #[serde(default)]
    pub espeak: EspeakConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub phoneme_type: PhonemeType,
    pub phoneme_id_map: HashMap<String, Vec<i64>>,
    #[serde(default = "default_num_speakers")]
    pub num_speakers: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AudioConfig {
    pub sample_rate: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EspeakConfig {
    pub voice: String,
}

impl Default for EspeakConfig {
    fn default() -> Self {
        Self {
            voice: "en-us".to_string(),
        }
    }
}

/// Synthesis scales passed to the model.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct InferenceConfig {
    #[serde(default = "default_noise_scale")]
    pub noise_scale: f32,
    #[serde(default = "default_length_scale")]
    pub length_scale: f32,
    #[serde(default = "default_noise_w")]
    pub noise_w: f32,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            noise_scale: default_noise_scale(),
            length_scale: default_length_scale(),
            noise_w: default_noise_w(),
        }
    }
}

impl InferenceConfig {
    /// Scales in model input order.
    pub fn as_array(&self) -> [f32; 3] {
        [self.noise_scale, self.length_scale, self.noise_w]
    }
}

/// How input text is turned into phonemes.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PhonemeType {
    /// IPA phonemes produced by espeak-ng
    #[default]
    Espeak,
    /// Unicode codepoints of the text itself
    Text,
}

fn default_num_speakers() -> u32 {
    1
}

fn default_noise_scale() -> f32 {
    0.667
}

fn default_length_scale() -> f32 {
    1.0
}

fn default_noise_w() -> f32 {
    0.8
}

impl PiperConfig {
    /// Read and parse a voice config file.
    pub fn from_file(path: &Path) -> Result<Self, VoiceError> {
        let json = std::fs::read_to_string(path).map_err(|source| VoiceError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&json).map_err(|source| VoiceError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_multi_speaker(&self) -> bool {
        self.num_speakers > 1
    }
}

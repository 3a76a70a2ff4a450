//! WAV file writer.

use std::path::Path;

use hound::{SampleFormat, WavSpec};
use tracing::{debug, warn};

use crate::engine::{AudioError, AudioWriter};

/// Writes mono 16-bit PCM WAV files.
#[derive(Debug, Default, Clone, Copy)]
pub struct WavWriter;

impl WavWriter {
    pub fn new() -> Self {
        Self
    }

    /// Whether `path` carries a `.wav` extension (case-insensitive).
    pub fn is_wav_path(path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
    }

    fn spec(sample_rate: u32) -> WavSpec {
        WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        }
    }
}

impl AudioWriter for WavWriter {
    fn write(&self, path: &Path, samples: &[i16], sample_rate: u32) -> Result<(), AudioError> {
        if !Self::is_wav_path(path) {
            warn!(
                path = %path.display(),
                "output extension is not .wav, writing WAV data anyway"
            );
        }

        let map_err = |err: hound::Error| match err {
            hound::Error::IoError(source) => AudioError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => AudioError::Wav(other.to_string()),
        };

        let mut writer = hound::WavWriter::create(path, Self::spec(sample_rate)).map_err(map_err)?;
        for &sample in samples {
            writer.write_sample(sample).map_err(map_err)?;
        }
        writer.finalize().map_err(map_err)?;

        debug!(path = %path.display(), samples = samples.len(), sample_rate, "wrote wav");
        Ok(())
    }
}

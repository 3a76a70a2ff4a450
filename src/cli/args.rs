//! CLI argument definitions and parsing.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use thiserror::Error;

/// Text-to-speech with Piper voice models.
#[derive(Parser, Debug, Default)]
#[command(name = "piper-say")]
#[command(about = "Synthesize speech from text with a Piper ONNX voice model")]
#[command(version)]
pub struct Args {
    /// Text to synthesize
    #[arg(long)]
    pub text: Option<String>,

    /// Output audio file (WAV)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Path to the voice model (.onnx)
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Voice config (.json); resolved next to the model when omitted
    #[arg(long, default_value = "")]
    pub config: String,

    /// Execution device: "cpu" or "gpu" ("cuda" is accepted as well)
    #[arg(long, default_value = "cpu")]
    pub device: String,

    /// List voice models found under --models_dir
    #[arg(long = "list_models")]
    pub list_models: bool,

    /// Directory scanned recursively by --list_models
    #[arg(long = "models_dir")]
    pub models_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execution device requested for synthesis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Device {
    #[default]
    Cpu,
    Gpu,
}

impl Device {
    /// Returns the canonical CLI spelling of this device.
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Cpu => "cpu",
            Device::Gpu => "gpu",
        }
    }

    pub fn is_gpu(&self) -> bool {
        matches!(self, Device::Gpu)
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for a device name that is neither CPU nor GPU.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unsupported device '{0}' (expected cpu or gpu)")]
pub struct DeviceParseError(pub String);

impl FromStr for Device {
    type Err = DeviceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(Device::Cpu),
            "gpu" | "cuda" => Ok(Device::Gpu),
            _ => Err(DeviceParseError(s.to_string())),
        }
    }
}

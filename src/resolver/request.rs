//! Synthesis request types and validation.

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use super::discovery::resolve_config_path;
use crate::cli::{Args, Device};

/// Errors detected while validating a synthesis or listing request.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("{0}")]
    Configuration(String),

    #[error("model not found: {}", .0.display())]
    ModelNotFound(PathBuf),
}

/// Raw, unvalidated synthesis input as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct RequestInput {
    pub text: Option<String>,
    pub out: Option<PathBuf>,
    pub model: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub device: String,
}

impl From<&Args> for RequestInput {
    fn from(args: &Args) -> Self {
        Self {
            text: args.text.clone(),
            out: args.out.clone(),
            model: args.model.clone(),
            config: Some(PathBuf::from(&args.config)),
            device: args.device.clone(),
        }
    }
}

/// A fully resolved synthesis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub text: String,
    pub output_path: PathBuf,
    pub model_path: PathBuf,
    pub config_path: PathBuf,
    pub device: Device,
}

impl SynthesisRequest {
    /// Validate raw input and resolve the voice config.
    ///
    /// Checks run in order and stop at the first failure: required fields,
    /// model existence, config resolution, device name.
    pub fn resolve(input: RequestInput) -> Result<Self, ResolveError> {
        let text = input.text.filter(|t| !t.is_empty());
        let out = non_empty(input.out);
        let model = non_empty(input.model);

        let (Some(text), Some(output_path), Some(model_path)) = (text, out, model) else {
            return Err(ResolveError::Configuration(
                "--text, --out, and --model are required".to_string(),
            ));
        };

        if !model_path.exists() {
            return Err(ResolveError::ModelNotFound(model_path));
        }

        let explicit = non_empty(input.config);
        let config_path = match resolve_config_path(&model_path, explicit.as_deref()) {
            Some(path) if path.exists() => path,
            Some(path) if explicit.is_some() => {
                return Err(ResolveError::Configuration(format!(
                    "config not found: {}",
                    path.display()
                )));
            }
            _ => {
                return Err(ResolveError::Configuration(
                    "config (.json) not found".to_string(),
                ));
            }
        };
        debug!(model = %model_path.display(), config = %config_path.display(), "resolved voice");

        let device = input
            .device
            .parse::<Device>()
            .map_err(|err| ResolveError::Configuration(err.to_string()))?;

        Ok(Self {
            text,
            output_path,
            model_path,
            config_path,
            device,
        })
    }

    /// Return the same request running on `device`.
    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }
}

fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}

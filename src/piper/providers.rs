//! Execution-provider discovery for ONNX Runtime.

use crate::engine::{Provider, ProviderQuery};

/// Queries ONNX Runtime for usable execution providers.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrtProviders;

impl OrtProviders {
    pub fn new() -> Self {
        Self
    }
}

impl ProviderQuery for OrtProviders {
    fn available_providers(&self) -> Vec<Provider> {
        let mut providers = Vec::with_capacity(2);
        if cuda_available() {
            providers.push(Provider::Cuda);
        }
        providers.push(Provider::Cpu);
        providers
    }
}

#[cfg(feature = "cuda")]
fn cuda_available() -> bool {
    use ort::execution_providers::{CUDAExecutionProvider, ExecutionProvider};

    CUDAExecutionProvider::default()
        .is_available()
        .unwrap_or(false)
}

#[cfg(not(feature = "cuda"))]
fn cuda_available() -> bool {
    false
}

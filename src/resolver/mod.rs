//! Synthesis request resolution.
//!
//! Turns raw command-line input into a fully specified synthesis request
//! (model, config, device) and discovers voice models on disk.

mod discovery;
mod request;

pub use discovery::{list_models, resolve_config_path};
pub use request::{RequestInput, ResolveError, SynthesisRequest};

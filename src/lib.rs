//! piper-say: text-to-speech CLI for Piper voice models.
//!
//! This crate resolves a voice model and its JSON configuration, picks an
//! execution provider for ONNX Runtime (falling back to CPU when no GPU is
//! available) and writes the synthesized speech to a WAV file.

pub mod audio;
pub mod cli;
pub mod engine;
pub mod piper;
pub mod resolver;

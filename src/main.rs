//! piper-say CLI entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use piper_say::audio::WavWriter;
use piper_say::cli::Args;
use piper_say::engine::{AudioWriter, ProviderQuery, TTSEngine, VoiceSynthesizer};
use piper_say::piper::{OrtProviders, PiperSynthesizer};
use piper_say::resolver::RequestInput;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let engine = TTSEngine::new(PiperSynthesizer::new(), OrtProviders::new(), WavWriter::new());

    if args.list_models {
        return list_models(&engine, args);
    }

    let mut stdout = io::stdout().lock();
    let outcome = engine.validate_and_run(RequestInput::from(args), &mut stdout)?;
    stdout.flush().context("Failed to flush stdout")?;

    tracing::info!(
        path = %outcome.output_path.display(),
        device = %outcome.device,
        samples = outcome.samples,
        "audio saved"
    );
    Ok(())
}

fn list_models<S, P, W>(engine: &TTSEngine<S, P, W>, args: &Args) -> Result<()>
where
    S: VoiceSynthesizer,
    P: ProviderQuery,
    W: AudioWriter,
{
    let models = engine.list_models(args.models_dir.as_deref())?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "models:")?;
    for model in models {
        writeln!(stdout, "{}", model.display())?;
    }

    Ok(())
}

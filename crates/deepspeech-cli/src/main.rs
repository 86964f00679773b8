//! Command-line transcription demo built on the `deepspeech` bindings.
//!
//! Loads a model, optionally attaches an external scorer, reads a WAV file
//! and prints the transcript, plainly or with per-token timing under
//! `--extended`.

mod audio;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use deepspeech::{Metadata, Model};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "deepspeech-cli",
    about = "Transcribe a WAV file with a DeepSpeech model"
)]
struct Cli {
    /// Path to the model file
    #[arg(long, env = "DEEPSPEECH_MODEL")]
    model: Option<String>,

    /// Path to the audio file to transcribe (16-bit mono WAV)
    #[arg(long)]
    audio: Option<PathBuf>,

    /// Path to an external scorer package
    #[arg(long)]
    scorer: Option<String>,

    /// Beam width for decoding; larger is slower and more accurate
    #[arg(long)]
    beam_width: Option<u32>,

    /// Language-model weight for the scorer
    #[arg(long, requires = "scorer")]
    lm_alpha: Option<f32>,

    /// Word-insertion weight for the scorer
    #[arg(long, requires = "scorer")]
    lm_beta: Option<f32>,

    /// Print ranked candidate transcripts with per-token timing
    #[arg(long)]
    extended: bool,

    /// Maximum candidates to request in extended mode
    #[arg(long, default_value_t = 3)]
    max_results: u32,

    /// Expected sample rate of the audio, overriding the model's
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Print the native library version and exit
    #[arg(long)]
    version: bool,
}

fn init_logging() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_level)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    if cli.version {
        println!("{}", deepspeech::version());
        return ExitCode::SUCCESS;
    }

    let (model_path, audio_path) = match (&cli.model, &cli.audio) {
        (Some(model), Some(audio)) => (model.clone(), audio.clone()),
        _ => {
            // Missing inputs get usage and a zero exit, same as --help.
            let _ = Cli::command().print_help();
            return ExitCode::SUCCESS;
        }
    };

    match run(&cli, &model_path, &audio_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, model_path: &str, audio_path: &Path) -> Result<()> {
    if cli.lm_alpha.is_some() != cli.lm_beta.is_some() {
        bail!("--lm-alpha and --lm-beta must be given together");
    }

    let model =
        Model::load(model_path).with_context(|| format!("loading model from {model_path}"))?;
    info!(
        native_version = %deepspeech::version(),
        sample_rate = model.sample_rate(),
        "model ready"
    );

    if let Some(width) = cli.beam_width {
        model
            .set_beam_width(width)
            .with_context(|| format!("setting beam width to {width}"))?;
    }

    if let Some(scorer) = &cli.scorer {
        model
            .enable_external_scorer(scorer)
            .with_context(|| format!("enabling scorer from {scorer}"))?;
        if let (Some(alpha), Some(beta)) = (cli.lm_alpha, cli.lm_beta) {
            model
                .set_scorer_alpha_beta(alpha, beta)
                .context("setting scorer hyperparameters")?;
        }
    }

    let expected_rate = cli.sample_rate.unwrap_or_else(|| model.sample_rate());
    let samples = audio::read_wav_samples(audio_path, expected_rate)?;
    info!(samples = samples.len(), "audio loaded");

    if cli.extended {
        let metadata = model
            .speech_to_text_with_metadata(&samples, cli.max_results)
            .context("transcribing with metadata")?;
        print_candidates(&metadata);
    } else {
        let text = model.speech_to_text(&samples).context("transcribing")?;
        println!("{text}");
    }
    Ok(())
}

fn print_candidates(metadata: &Metadata) {
    for (rank, transcript) in metadata.transcripts().iter().enumerate() {
        println!(
            "#{rank} (confidence {:.3}): {}",
            transcript.confidence(),
            transcript.text()
        );
        for token in transcript.tokens() {
            println!(
                "    {:7.3}s  frame {:5}  {}",
                token.start_time(),
                token.timestep(),
                token.text()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_typical_invocation() {
        let cli = Cli::try_parse_from([
            "deepspeech-cli",
            "--model",
            "output_graph.pbmm",
            "--audio",
            "utterance.wav",
            "--scorer",
            "kenlm.scorer",
            "--lm-alpha",
            "0.93",
            "--lm-beta",
            "1.18",
            "--extended",
            "--max-results",
            "5",
        ])
        .unwrap();
        assert!(cli.extended);
        assert_eq!(cli.max_results, 5);
        assert_eq!(cli.beam_width, None);
    }

    #[test]
    fn scorer_weights_require_a_scorer() {
        let parsed = Cli::try_parse_from(["deepspeech-cli", "--lm-alpha", "0.93"]);
        assert!(parsed.is_err());
    }
}

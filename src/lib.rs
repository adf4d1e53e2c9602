//! Generator for the wscribe-editor introduction audio clip.
//!
//! The narration in [`narration::NARRATION`] is split into sentences,
//! each sentence is synthesized with a fixed voice preset, and the
//! buffers are joined with quarter-second silence gaps (one after every
//! sentence, the last one included). The result lands in
//! `wscribe_editor_intro.wav` in the working directory as mono float
//! samples at the model's native rate. Converting it to mp3 for the
//! website is a manual post-step:
//!
//! ```text
//! ffmpeg -i wscribe_editor_intro.wav wscribe_editor_intro.mp3
//! ```
//!
//! The real synthesis backend is PocketTTS behind the
//! `pocket-tts-backend` cargo feature; the default build carries only
//! the pipeline and bails at backend selection, since this crate is kept
//! as a recorded recipe rather than something run routinely. Two
//! environment variables are passed straight through to the underlying
//! layers: [`tts::pocket::VARIANT_ENV`] picks an alternate (smaller)
//! model variant and [`segment::DATA_DIR_ENV`] points the sentence
//! segmenter at its rules directory.

pub mod audio;
pub mod cli;
pub mod narration;
pub mod segment;
pub mod tts;

use anyhow::Context;
use cli::Cli;
use std::path::Path;
use tts::provider::SpeechModel;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    setup_tracing(cli.verbose);

    let model = tts::provider::select_backend(tts::DEFAULT_BACKEND)?;
    let rules = segment::SentenceRules::load_default().context("load segmenter rules")?;

    let track = generate_intro(
        model.as_ref(),
        narration::NARRATION,
        &rules,
        narration::VOICE_PRESET,
    )?;

    let path = Path::new(narration::OUTPUT_FILE);
    audio::wav::write_mono(path, &track, model.sample_rate())
        .with_context(|| format!("write {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        samples = track.len(),
        sample_rate = model.sample_rate(),
        "intro track written"
    );

    Ok(())
}

/// Runs the synthesis pipeline for one narration string and returns the
/// assembled track. The model is preloaded before any generation call;
/// if preloading fails, no sentence is synthesized.
pub fn generate_intro(
    model: &dyn SpeechModel,
    text: &str,
    rules: &segment::SentenceRules,
    voice: &str,
) -> anyhow::Result<Vec<f32>> {
    model.preload().context("preload speech model")?;

    let sentences = segment::split_sentences(text, rules);
    tracing::info!(sentences = sentences.len(), "segmented narration");

    tts::synthesize_track(model, &sentences, voice)
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

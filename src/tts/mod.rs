pub mod pocket;
pub mod provider;

use crate::audio;
use anyhow::Context;
use provider::SpeechModel;

pub const DEFAULT_BACKEND: &str = "pocket-tts";

/// Synthesize each sentence in order with a fixed voice and assemble
/// the track with a shared silence gap after every sentence. Any model
/// error aborts the whole run; there is no per-sentence retry or skip.
pub fn synthesize_track(
    model: &dyn SpeechModel,
    sentences: &[String],
    voice: &str,
) -> anyhow::Result<Vec<f32>> {
    let silence = audio::silence_buffer(model.sample_rate());

    let mut pieces = Vec::with_capacity(sentences.len());
    for (idx, sentence) in sentences.iter().enumerate() {
        tracing::info!(sentence = idx + 1, total = sentences.len(), "synthesizing");
        tracing::debug!(text = %sentence);
        let samples = model
            .generate(sentence, voice)
            .with_context(|| format!("synthesize sentence {} of {}", idx + 1, sentences.len()))?;
        pieces.push(samples);
    }

    Ok(audio::assemble(&pieces, &silence))
}

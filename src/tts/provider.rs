use anyhow::bail;

/// Seam between the pipeline and a concrete synthesis model.
///
/// `preload` is called exactly once, before any `generate` call, and
/// blocks until the model weights are ready. `generate` returns raw
/// samples at the model's fixed [`sample_rate`](SpeechModel::sample_rate).
pub trait SpeechModel: Send + Sync {
    fn name(&self) -> &str;
    fn preload(&self) -> anyhow::Result<()>;
    fn sample_rate(&self) -> u32;
    fn generate(&self, sentence: &str, voice: &str) -> anyhow::Result<Vec<f32>>;
}

pub fn select_backend(name: &str) -> anyhow::Result<Box<dyn SpeechModel>> {
    match name {
        "pocket-tts" => {
            #[cfg(feature = "pocket-tts-backend")]
            {
                Ok(Box::new(super::pocket::PocketBackend::new()))
            }
            #[cfg(not(feature = "pocket-tts-backend"))]
            {
                bail!("pocket-tts backend not enabled; rebuild with --features pocket-tts-backend")
            }
        }
        _ => bail!("unknown backend: {name}"),
    }
}

//! PocketTTS backend. The model library handles its own weight
//! downloads and caching; this module only adapts it to the
//! [`SpeechModel`](super::provider::SpeechModel) seam.

/// Environment variable overriding the model variant id, the way one
/// would pick a smaller model for a quick render. Consumed here, not by
/// the pipeline.
pub const VARIANT_ENV: &str = "WSCRIBE_TTS_VARIANT";

/// PocketTTS output rate in Hz.
pub const SAMPLE_RATE: u32 = 24_000;

#[cfg(feature = "pocket-tts-backend")]
mod imp {
    use anyhow::{bail, Context};
    use pocket_tts::config::defaults;
    use pocket_tts::weights::download_if_necessary;
    use pocket_tts::{ModelState, TTSModel};
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::sync::{Arc, OnceLock};

    use crate::tts::provider::SpeechModel;

    use super::{SAMPLE_RATE, VARIANT_ENV};

    const DEFAULT_VARIANT: &str = "b6369a24";

    static MODEL: OnceLock<Arc<TTSModel>> = OnceLock::new();

    pub struct PocketBackend;

    impl PocketBackend {
        pub fn new() -> Self {
            Self
        }
    }

    impl Default for PocketBackend {
        fn default() -> Self {
            Self::new()
        }
    }

    fn variant() -> String {
        std::env::var(VARIANT_ENV).unwrap_or_else(|_| DEFAULT_VARIANT.to_string())
    }

    fn load_model() -> anyhow::Result<Arc<TTSModel>> {
        if let Some(model) = MODEL.get() {
            return Ok(model.clone());
        }

        let variant = variant();
        tracing::info!(%variant, "loading PocketTTS model");
        let model = TTSModel::load_with_params_device(
            &variant,
            defaults::TEMPERATURE,
            defaults::LSD_DECODE_STEPS,
            defaults::EOS_THRESHOLD,
            None,
            &candle_core::Device::Cpu,
        )
        .with_context(|| format!("load PocketTTS variant {variant}"))?;

        Ok(MODEL.get_or_init(|| Arc::new(model)).clone())
    }

    fn resolve_voice_state(model: &TTSModel, voice: &str) -> anyhow::Result<ModelState> {
        let spec = voice.trim();
        if spec.is_empty() {
            bail!("voice preset is empty");
        }

        let path = PathBuf::from(spec);
        if path.exists() {
            return model.get_voice_state(&path).context("load voice wav");
        }

        let hf_path =
            format!("hf://kyutai/pocket-tts-without-voice-cloning/embeddings/{spec}.safetensors");
        let path = download_if_necessary(&hf_path)?;
        model
            .get_voice_state_from_prompt_file(&path)
            .context("load voice prompt")
    }

    fn samples_from_wav(cursor: Cursor<Vec<u8>>) -> anyhow::Result<Vec<f32>> {
        let reader = hound::WavReader::new(cursor).context("decode synthesized wav")?;
        match reader.spec().sample_format {
            hound::SampleFormat::Float => reader
                .into_samples::<f32>()
                .map(|s| s.map_err(Into::into))
                .collect(),
            hound::SampleFormat::Int => {
                let scale = 1.0 / f32::from(i16::MAX);
                reader
                    .into_samples::<i16>()
                    .map(|s| s.map(|v| f32::from(v) * scale).map_err(Into::into))
                    .collect()
            }
        }
    }

    impl SpeechModel for PocketBackend {
        fn name(&self) -> &str {
            "pocket-tts"
        }

        fn preload(&self) -> anyhow::Result<()> {
            load_model().map(|_| ())
        }

        fn sample_rate(&self) -> u32 {
            SAMPLE_RATE
        }

        fn generate(&self, sentence: &str, voice: &str) -> anyhow::Result<Vec<f32>> {
            let model = load_model()?;
            let voice_state = resolve_voice_state(&model, voice)?;

            let audio = model.generate(sentence, &voice_state)?;
            let mut cursor = Cursor::new(Vec::new());
            pocket_tts::audio::write_wav_to_writer(&mut cursor, &audio, model.sample_rate as u32)?;
            cursor.set_position(0);
            samples_from_wav(cursor)
        }
    }
}

#[cfg(feature = "pocket-tts-backend")]
pub use imp::PocketBackend;

#[cfg(not(feature = "pocket-tts-backend"))]
pub struct PocketBackend;

#[cfg(not(feature = "pocket-tts-backend"))]
impl PocketBackend {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(feature = "pocket-tts-backend"))]
impl Default for PocketBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(feature = "pocket-tts-backend"))]
impl super::provider::SpeechModel for PocketBackend {
    fn name(&self) -> &str {
        "pocket-tts"
    }

    fn preload(&self) -> anyhow::Result<()> {
        anyhow::bail!("pocket-tts backend not enabled")
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn generate(&self, _sentence: &str, _voice: &str) -> anyhow::Result<Vec<f32>> {
        anyhow::bail!("pocket-tts backend not enabled")
    }
}

//! Track assembly: gap buffer allocation and ordered concatenation.

pub mod wav;

/// Gap inserted after every synthesized sentence, in seconds.
pub const GAP_SECONDS: f64 = 0.25;

/// Allocate the all-zero gap buffer for a sample rate. The length is
/// `GAP_SECONDS * sample_rate` truncated toward zero, so repeated calls
/// agree. Callers allocate this once and reuse it at every gap.
pub fn silence_buffer(sample_rate: u32) -> Vec<f32> {
    vec![0.0; (GAP_SECONDS * f64::from(sample_rate)) as usize]
}

/// Concatenate sentence buffers in order, appending the shared silence
/// after each one, the last included. An empty piece list yields an
/// empty track.
pub fn assemble(pieces: &[Vec<f32>], silence: &[f32]) -> Vec<f32> {
    let total = pieces.iter().map(Vec::len).sum::<usize>() + pieces.len() * silence.len();
    let mut track = Vec::with_capacity(total);
    for piece in pieces {
        track.extend_from_slice(piece);
        track.extend_from_slice(silence);
    }
    track
}

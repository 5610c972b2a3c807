pub mod waveform;

pub use waveform::Waveform;

/// Base samples consumed per embedded signal sample.
pub const BASE_PER_FRAME: usize = 3;

/// Samples emitted per combined frame: the base group plus one signal slot.
pub const FRAME_LEN: usize = BASE_PER_FRAME + 1;

//! Payload bytes viewed as signed 8-bit PCM.
//!
//! Every byte maps to exactly one sample by shifting the unsigned range
//! `0..=255` down to `-128..=127`, so ordering is preserved and the mapping is
//! a bijection.

pub mod decode;
pub mod encode;

pub use decode::{decode_signal, sample_to_byte};
pub use encode::{byte_to_sample, encode_payload};

/// Offset between an unsigned payload byte and its signed sample.
pub const SIGNAL_BIAS: i16 = 128;

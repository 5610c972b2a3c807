pub mod signal;

pub use signal::{decode_signal, encode_payload};

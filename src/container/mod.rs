pub mod wav;

pub use wav::{WavFormat, WavReader, WavWriter, read_wav, write_wav};

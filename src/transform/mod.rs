pub mod interleave;
pub mod loop_pad;

pub use interleave::{DEFAULT_BASE_SCALE, Interleave, extract};
pub use loop_pad::pad_loop;

pub mod args;
pub mod pipeline;

pub use args::{Args, Command};
pub use pipeline::{BatchDropPipeline, CreatePipeline, DropPipeline, expand_glob, is_batch_pattern};

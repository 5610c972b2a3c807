pub mod reader;

pub use reader::ReadPrimitives;

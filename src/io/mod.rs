//! I/O layer: decoding source images from disk and writing RGBA PNG outputs.
pub mod reader;
pub use reader::decode_image;

pub mod writers;

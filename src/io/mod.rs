//! I/O layer: decoding the source image (`reader`) and `writers` for the
//! atomic PNG output and the optional JSON crop report.
pub mod reader;
pub use reader::open_image;

pub mod writers;

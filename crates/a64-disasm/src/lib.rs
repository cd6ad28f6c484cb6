pub mod model;

pub use model::{load_raw_bin, read_u32, read_u8, Image, Segment};

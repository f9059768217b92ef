//! Font binary reading and name resolution

pub mod names;
pub mod reader;

pub use names::{best_name, resolve};
pub use reader::{read_font, FontBinary, FontFormat, NameRecord, NameTable};

//! File I/O and JSON encoding for the note store

mod ascii_json;
mod fs;

pub use ascii_json::{AsciiPrettyFormatter, to_vec_pretty_ascii};
pub use fs::{FsError, ensure_dir, read_text, write_atomic};

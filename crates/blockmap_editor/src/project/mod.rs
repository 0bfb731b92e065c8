//! Map file handling for the running editor

mod file;

pub use file::{save_map, save_on_close};

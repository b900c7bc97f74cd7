pub mod cli;
pub mod core;
pub mod fs;
pub mod models;

pub use crate::core::walk::{WalkOptions, write_tree};

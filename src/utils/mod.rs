//! Utility functions shared by the generator, the wizard and the config loader.

pub mod fs;

pub use fs::{atomic_write, ensure_dir, expand_user_path, read_text_file, safe_write};

pub mod paths;

pub use paths::{normalize_root, split_source_path, validate_file_size};

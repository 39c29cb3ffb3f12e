//! # Small DIMACS instances
//!
//! Each instance `<name>.max` comes with a file `<name>.sol` holding its maximum flow value.
use std::path::{Path, PathBuf};

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the instance files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of a file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
/// * `extension`: `max` for the instance, `sol` for its solution.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str, extension: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension(extension)
}

//! # Reading of flow networks
//!
//! This module provides read functionality for maximum flow instances in the DIMACS format, and for
//! the files holding their known maximum flow values.
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use log::info;

use crate::data::network::{Capacity, FlowNetwork};
use crate::io::error::ImportError;

pub mod dimacs;
pub mod error;

/// Import a network from a file.
///
/// The `import` function takes a file path and returns, if successful, a network ready to be given
/// to any of the algorithms.
///
/// # Errors
///
/// When a file cannot be found or read, the file is not valid DIMACS or describes an inconsistent
/// network, an error type is returned.
pub fn import<C: Capacity + FromStr>(file_path: &Path) -> Result<FlowNetwork<C>, ImportError> {
    info!("Reading problem file \"{}\"", file_path.display());
    let text = read_to_string(file_path)?;

    dimacs::parse(&text)
}

/// Import the known value of a maximum flow from a solution file.
///
/// # Errors
///
/// When a file cannot be found or read, or doesn't contain a solution line.
pub fn import_solution<C: Capacity + FromStr>(file_path: &Path) -> Result<C, ImportError> {
    info!("Reading solution file \"{}\"", file_path.display());
    let text = read_to_string(file_path)?;

    dimacs::parse_solution(&text)
}

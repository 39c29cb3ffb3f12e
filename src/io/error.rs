//! # Error reporting for reading of network files
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing.
use std::error::Error as StdError;
use std::fmt::{Display, Formatter};
use std::fmt;
use std::io;

use thiserror::Error;

use crate::data::network::NetworkError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    #[error(transparent)]
    IO(#[from] io::Error),
    /// Contents of the file could not be parsed.
    ///
    /// # Note
    ///
    /// If the described network is inconsistent, e.g. because the source and sink coincide, that
    /// is represented by the `Network` variant instead. This variant should only be created for
    /// syntactically incorrect files.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The network described by the file is not a valid flow network.
    #[error("inconsistent network: {0}")]
    Network(#[from] NetworkError),
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It optionally carries the location in the file at which the error was caused.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseError {
    description: String,
    location: Option<(usize, String)>,
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into(), location: None }
    }

    /// Create a new `ParseError` pointing at the line that caused it.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: Line number and line that caused the error.
    pub fn with_file_location(description: impl Into<String>, file_location: FileLocation) -> Self {
        let (line_number, line) = file_location;

        Self {
            description: description.into(),
            location: Some((line_number, line.to_string())),
        }
    }

    /// What went wrong.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of the line that caused the error, counting from 1.
    pub fn line_number(&self) -> Option<usize> {
        self.location.as_ref().map(|&(line_number, _)| line_number)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ParseError: {}", self.description)?;
        if let Some((line_number, line)) = &self.location {
            write!(f, "\n\tCaused at line\t{line_number}:\t{line}")?;
        }

        Ok(())
    }
}

impl StdError for ParseError {}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk, counting from 1. It contains a reference to the line itself.
pub(super) type FileLocation<'a> = (usize, &'a str);

#![allow(dead_code)]

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelperError {
	#[error("cannot read {path}: {source}")]
	Read { path: String, source: io::Error },
	#[error("cannot write {path}: {source}")]
	Write { path: String, source: io::Error },
}

/// Read a working-directory input file fully into memory.
pub fn read_input(path: &Path) -> Result<String, HelperError> {
	fs::read_to_string(path).map_err(|source| HelperError::Read {
		path: path.display().to_string(),
		source,
	})
}

/// Overwrite `path` with exactly `text`. No appended newline: the file holds
/// the trimmed response and nothing else.
pub fn write_output(path: &Path, text: &str) -> Result<(), HelperError> {
	fs::write(path, text).map_err(|source| HelperError::Write {
		path: path.display().to_string(),
		source,
	})
}

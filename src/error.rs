use std::io;
use std::path::{Path, PathBuf};

/// A file could not be opened or read while computing its digest.
#[derive(Debug, thiserror::Error)]
#[error("Unable to read file '{}': {source}", .path.display())]
pub struct FileReadError {
	path: PathBuf,
	#[source]
	source: io::Error,
}

impl FileReadError {
	pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
		FileReadError {
			path: path.into(),
			source,
		}
	}

	/// The file that failed.
	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn io_error(&self) -> &io::Error {
		&self.source
	}
}

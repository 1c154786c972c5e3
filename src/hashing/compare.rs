use std::path::Path;

use crate::error::FileReadError;
use crate::hashing::file_hash::{Algorithm, ChunkSize, HexDigest, compute_digest_with};

/// Digests of two files and whether they agree.
#[derive(Debug, Clone)]
pub struct Comparison {
	pub first: HexDigest,
	pub second: HexDigest,
}

impl Comparison {
	pub fn is_match(&self) -> bool {
		self.first == self.second
	}
}

/// Digests both files with `algorithm`, first then second.
pub fn compare_files(
	first: &Path,
	second: &Path,
	chunk_size: ChunkSize,
	algorithm: Algorithm,
) -> Result<Comparison, FileReadError> {
	let first = compute_digest_with(first, chunk_size, algorithm)?;
	let second = compute_digest_with(second, chunk_size, algorithm)?;
	Ok(Comparison { first, second })
}

pub fn files_match_with(
	first: &Path,
	second: &Path,
	chunk_size: ChunkSize,
	algorithm: Algorithm,
) -> Result<bool, FileReadError> {
	Ok(compare_files(first, second, chunk_size, algorithm)?.is_match())
}

/// True when both files have the same SHA-1 digest.
pub fn files_match(
	first: &Path,
	second: &Path,
	chunk_size: ChunkSize,
) -> Result<bool, FileReadError> {
	files_match_with(first, second, chunk_size, Algorithm::Sha1)
}

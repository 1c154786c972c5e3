use log::{debug, trace};
use sha1::{Digest, Sha1};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::num::NonZeroUsize;
use std::path::Path;
use std::str::FromStr;

use crate::error::FileReadError;

/// Largest read buffer allocated, whatever chunk size is requested.
const MAX_BUFFER_BYTES: usize = 8 * 1024 * 1024;

/// Number of bytes requested from the file per read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSize(NonZeroUsize);

impl ChunkSize {
	pub const DEFAULT: ChunkSize = match NonZeroUsize::new(1024) {
		Some(n) => ChunkSize(n),
		None => panic!("default chunk size is non-zero"),
	};

	/// Returns `None` for zero.
	pub fn new(bytes: usize) -> Option<Self> {
		NonZeroUsize::new(bytes).map(ChunkSize)
	}

	pub fn get(self) -> usize {
		self.0.get()
	}
}

impl Default for ChunkSize {
	fn default() -> Self {
		ChunkSize::DEFAULT
	}
}

impl fmt::Display for ChunkSize {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for ChunkSize {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let bytes: usize = s
			.trim()
			.parse()
			.map_err(|e| format!("invalid chunk size '{}': {}", s, e))?;
		ChunkSize::new(bytes).ok_or_else(|| "chunk size must be greater than zero".to_string())
	}
}

/// Hash function used to fingerprint file contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
	#[default]
	Sha1,
	Md5,
}

impl Algorithm {
	/// Length of the rendered hex digest.
	pub fn hex_len(self) -> usize {
		match self {
			Algorithm::Sha1 => 40,
			Algorithm::Md5 => 32,
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			Algorithm::Sha1 => "sha1",
			Algorithm::Md5 => "md5",
		}
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Algorithm {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"sha1" | "sha-1" => Ok(Algorithm::Sha1),
			"md5" => Ok(Algorithm::Md5),
			other => Err(format!("unknown algorithm '{}' (expected sha1 or md5)", other)),
		}
	}
}

/// Lowercase hex rendering of a finished hash.
#[derive(Debug, Clone)]
pub struct HexDigest {
	hex: String,
	algorithm: Algorithm,
}

impl HexDigest {
	pub fn as_str(&self) -> &str {
		&self.hex
	}

	pub fn algorithm(&self) -> Algorithm {
		self.algorithm
	}
}

impl PartialEq for HexDigest {
	fn eq(&self, other: &Self) -> bool {
		self.hex == other.hex
	}
}

impl Eq for HexDigest {}

impl fmt::Display for HexDigest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.hex)
	}
}

enum Hasher {
	Sha1(Sha1),
	Md5(md5::Context),
}

impl Hasher {
	fn new(algorithm: Algorithm) -> Self {
		match algorithm {
			Algorithm::Sha1 => Hasher::Sha1(Sha1::new()),
			Algorithm::Md5 => Hasher::Md5(md5::Context::new()),
		}
	}

	fn update(&mut self, bytes: &[u8]) {
		match self {
			Hasher::Sha1(hasher) => hasher.update(bytes),
			Hasher::Md5(context) => context.consume(bytes),
		}
	}

	fn algorithm(&self) -> Algorithm {
		match self {
			Hasher::Sha1(_) => Algorithm::Sha1,
			Hasher::Md5(_) => Algorithm::Md5,
		}
	}

	fn finish(self) -> HexDigest {
		let algorithm = self.algorithm();
		let hex = match self {
			Hasher::Sha1(hasher) => hex::encode(hasher.finalize()),
			Hasher::Md5(context) => hex::encode(context.finalize().0),
		};
		debug_assert_eq!(hex.len(), algorithm.hex_len());
		HexDigest { hex, algorithm }
	}
}

/// Hashes everything `reader` yields, reading up to `chunk_size` bytes at a
/// time. The buffer is capped at 8 MiB, so huge chunk sizes only mean fewer
/// reads, never a huge allocation.
pub fn digest_reader<R: Read>(
	mut reader: R,
	chunk_size: ChunkSize,
	algorithm: Algorithm,
) -> io::Result<HexDigest> {
	let mut hasher = Hasher::new(algorithm);
	let mut buffer = vec![0; chunk_size.get().min(MAX_BUFFER_BYTES)];
	let mut total_bytes: u64 = 0;

	loop {
		let bytes_read = match reader.read(&mut buffer) {
			Ok(0) => break,
			Ok(n) => n,
			Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
			Err(e) => return Err(e),
		};
		hasher.update(&buffer[..bytes_read]);
		total_bytes += bytes_read as u64;
	}

	trace!("{} consumed {} bytes", algorithm, total_bytes);
	Ok(hasher.finish())
}

/// SHA-1 digest of the file at `path`.
pub fn compute_digest(path: &Path, chunk_size: ChunkSize) -> Result<HexDigest, FileReadError> {
	compute_digest_with(path, chunk_size, Algorithm::Sha1)
}

/// Digest of the file at `path` using `algorithm`.
///
/// Any failure to open or read the file is reported as a [`FileReadError`]
/// carrying `path`; the file handle is closed before this returns either way.
pub fn compute_digest_with(
	path: &Path,
	chunk_size: ChunkSize,
	algorithm: Algorithm,
) -> Result<HexDigest, FileReadError> {
	let file = File::open(path).map_err(|e| FileReadError::new(path, e))?;
	let digest =
		digest_reader(file, chunk_size, algorithm).map_err(|e| FileReadError::new(path, e))?;

	debug!(
		"{} of {} ({}-byte chunks): {}",
		algorithm,
		path.display(),
		chunk_size,
		digest
	);
	Ok(digest)
}

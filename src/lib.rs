//! Streaming file digests and digest-based file comparison.

pub mod error;
pub mod hashing;

pub use error::FileReadError;
pub use hashing::compare::{Comparison, compare_files, files_match, files_match_with};
pub use hashing::file_hash::{
	Algorithm, ChunkSize, HexDigest, compute_digest, compute_digest_with, digest_reader,
};

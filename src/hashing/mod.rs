pub mod compare;
pub mod file_hash;

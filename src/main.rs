use clap::Parser;
use log::info;
use pdfmatch::{Algorithm, ChunkSize, compare_files};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(about = "Checks whether two files are identical by comparing their digests", long_about = None)]
#[clap(author, version)]
struct Args {
	/// First file to compare
	#[arg(default_value = "file1.txt")]
	file_one: PathBuf,

	/// Second file to compare
	#[arg(default_value = "file2.txt")]
	file_two: PathBuf,

	/// Number of bytes to read at a time
	#[arg(short, long, default_value_t = ChunkSize::DEFAULT)]
	chunk_size: ChunkSize,

	/// Hash algorithm: sha1 or md5
	#[arg(short, long, default_value_t = Algorithm::Sha1)]
	algorithm: Algorithm,

	/// Print both digests before the verdict
	#[arg(short, long)]
	verbose: bool,
}

fn main() {
	let args = Args::parse();

	let default_filter = if args.verbose { "info" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
		.format_timestamp_millis()
		.init();

	info!(
		"comparing {} and {} using {}",
		args.file_one.display(),
		args.file_two.display(),
		args.algorithm
	);

	let comparison = match compare_files(
		&args.file_one,
		&args.file_two,
		args.chunk_size,
		args.algorithm,
	) {
		Ok(comparison) => comparison,
		Err(e) => {
			eprintln!("{}", e);
			process::exit(1);
		}
	};

	if args.verbose {
		println!("{}  {}", comparison.first, args.file_one.display());
		println!("{}  {}", comparison.second, args.file_two.display());
	}

	if comparison.is_match() {
		println!("The files are identical (matching hashes).");
	} else {
		println!("The files are different (hashes are not matching).");
	}
}

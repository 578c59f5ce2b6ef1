use crate::runner::{CommandError, CommandRunner};
use sha3::{Digest, Sha3_256};

#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
	#[error("Checksum command failed: {0}")]
	Command(#[from] CommandError),
	#[error("Path '{0}' cannot be passed to the shell")]
	UnquotablePath(String),
	#[error("Unrecognized checksum output for '{path}': {output:?}")]
	UnrecognizedOutput { path: String, output: Vec<String> },
}

pub fn sha3_256_hex(data: impl AsRef<[u8]>) -> String {
	hex::encode(Sha3_256::digest(data.as_ref()))
}

/// Path hash blobbers use to address a file inside an allocation.
pub fn reference_lookup_hash(allocation_id: &str, path: &str) -> String {
	sha3_256_hex(format!("{allocation_id}:{path}"))
}

/// SHA-256 of a local file, computed by `shasum -a 256`.
pub fn checksum<R: CommandRunner + ?Sized>(
	runner: &R,
	path: &str,
) -> Result<String, ChecksumError> {
	let quoted =
		shlex::try_quote(path).map_err(|_| ChecksumError::UnquotablePath(path.to_string()))?;
	let output = runner.run(&format!("shasum -a 256 {quoted}"))?;
	output
		.iter()
		.filter(|line| line.trim_end().ends_with(path))
		.find_map(|line| parse_digest(line))
		.ok_or_else(|| ChecksumError::UnrecognizedOutput { path: path.to_string(), output })
}

fn parse_digest(line: &str) -> Option<String> {
	let digest = line.split_whitespace().next()?;
	(digest.len() == 64 && digest.chars().all(|c| c.is_ascii_hexdigit()))
		.then(|| digest.to_ascii_lowercase())
}

use rand::RngCore;
use rand::distr::{Alphanumeric, SampleString};
use std::path::Path;

/// Makes a test name usable as a file or wallet name. Spaces become `_`, as Go's `t.Name()` does.
pub fn escaped_test_name(name: &str) -> String {
	let mut escaped = String::with_capacity(name.len());
	for c in name.chars() {
		match c {
			'/' | '"' | ':' | '(' | ')' | '|' | '*' | '?' => escaped.push('-'),
			' ' => escaped.push('_'),
			'<' => escaped.push_str("LT"),
			'>' => escaped.push_str("GT"),
			c => escaped.push(c),
		}
	}
	escaped
}

pub fn random_test_file_name(dir: &str, test_name: &str) -> String {
	let suffix = Alphanumeric.sample_string(&mut rand::rng(), 10);
	format!("{}/{}_{}_test.txt", dir.trim_end_matches('/'), escaped_test_name(test_name), suffix)
}

/// Writes `size` random bytes to `path`, creating missing parent directories.
pub fn create_file_with_size(path: impl AsRef<Path>, size: u64) -> std::io::Result<()> {
	let path = path.as_ref();
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		std::fs::create_dir_all(parent)?;
	}
	let mut buffer = vec![0u8; size as usize];
	rand::rng().fill_bytes(&mut buffer);
	std::fs::write(path, buffer)
}

pub fn file_name(path: &str) -> &str {
	path.rsplit('/').next().unwrap_or(path)
}

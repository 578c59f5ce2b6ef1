//! Scenarios driving the `zbox` and `zwallet` clients against a live network.

mod miner_sharder_pool_info;

use anyhow::bail;
use cli_model::FileStats;
use cli_runner::CommandError;
use std::collections::HashMap;

/// Output of a command that is expected to fail.
fn expect_failure(result: Result<Vec<String>, CommandError>) -> anyhow::Result<Vec<String>> {
	match result {
		Ok(output) => bail!("Command unexpectedly succeeded: {output:?}"),
		Err(err @ CommandError::Spawn { .. }) => Err(err.into()),
		Err(err) => Ok(err.output().to_vec()),
	}
}

/// `zbox stats --json` prints one object keyed by blobber id.
fn parse_stats(output: &[String]) -> anyhow::Result<HashMap<String, FileStats>> {
	match output {
		[line] => Ok(serde_json::from_str(line)?),
		_ => bail!("Expected a single line of stats, got {output:?}"),
	}
}

fn blocks_for(size: i64, chunk_size: u64) -> i64 {
	(size as f64 / chunk_size as f64).ceil() as i64
}

fn remove_file(path: &str) -> anyhow::Result<()> {
	std::fs::remove_file(path).map_err(|e| anyhow::anyhow!("Could not delete {path}: {e}"))
}

/// Deletes a file or directory if it exists.
fn remove_if_exists(path: &str) {
	let _ = std::fs::remove_dir_all(path);
	let _ = std::fs::remove_file(path);
}

fn system_tmp_dir() -> String {
	std::env::temp_dir().display().to_string().trim_end_matches('/').to_string()
}

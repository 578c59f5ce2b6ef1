//! Configuration of a system test run.
//!
//! Values are layered: built-in defaults, then an optional JSON file, then environment variables
//! prefixed with `SYSTEM_TEST__`, using `__` to address nested fields, for example
//! `SYSTEM_TEST__ZBOX__CLI=/usr/local/bin/zbox` or `SYSTEM_TEST__RETRY__ATTEMPTS=5`.

use cli_runner::RetryPolicy;
use figment::{
	Figment,
	providers::{Env, Format, Json, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Names the JSON file read by [SystemTestConfig::load].
pub const CONFIG_FILE_ENV: &str = "SYSTEM_TEST_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "config/system_test.json";
pub const ENV_PREFIX: &str = "SYSTEM_TEST__";
pub const DEFAULT_CHUNK_SIZE: u64 = 64 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("Invalid system test configuration: {0}")]
	Invalid(#[from] Box<figment::Error>),
	#[error("Configuration file '{0}' does not exist")]
	MissingFile(PathBuf),
}

impl From<figment::Error> for ConfigError {
	fn from(err: figment::Error) -> Self {
		ConfigError::Invalid(Box::new(err))
	}
}

/// A command line client and the shell it is run in.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Tool {
	pub cli: String,
	/// Wraps every command, e.g. `docker exec zbox bash -c`.
	#[serde(default)]
	pub shell: Option<String>,
}

impl Tool {
	fn local(cli: &str) -> Self {
		Self { cli: cli.to_string(), shell: None }
	}
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Retry {
	pub attempts: usize,
	pub delay_secs: u64,
}

impl Default for Retry {
	fn default() -> Self {
		Self { attempts: 3, delay_secs: 2 }
	}
}

impl From<&Retry> for RetryPolicy {
	fn from(retry: &Retry) -> Self {
		RetryPolicy::new(retry.attempts, Duration::from_secs(retry.delay_secs))
	}
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Timeouts {
	/// Pause before each download so blobbers can finish committing uploads.
	pub download_settle_secs: u64,
	pub api_request_secs: u64,
	pub poll_interval_secs: u64,
	pub transaction_secs: u64,
}

impl Default for Timeouts {
	fn default() -> Self {
		Self {
			download_settle_secs: 15,
			api_request_secs: 30,
			poll_interval_secs: 5,
			transaction_secs: 120,
		}
	}
}

impl Timeouts {
	pub fn download_settle(&self) -> Duration {
		Duration::from_secs(self.download_settle_secs)
	}

	pub fn api_request(&self) -> Duration {
		Duration::from_secs(self.api_request_secs)
	}

	pub fn poll_interval(&self) -> Duration {
		Duration::from_secs(self.poll_interval_secs)
	}

	pub fn transaction(&self) -> Duration {
		Duration::from_secs(self.transaction_secs)
	}
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SystemTestConfig {
	pub zbox: Tool,
	pub zwallet: Tool,
	/// Passed to both clients as `--configDir`.
	pub config_dir: String,
	/// Passed to both clients as `--config`.
	pub cli_config: String,
	/// Local scratch directory for generated and downloaded files.
	pub tmp_dir: String,
	#[serde(default)]
	pub miner01_id: String,
	#[serde(default)]
	pub sharder01_id: String,
	/// Base URL of the `/network` discovery endpoint used by API tests.
	#[serde(default)]
	pub network_entrypoint: String,
	pub retry: Retry,
	pub timeouts: Timeouts,
	pub chunk_size: u64,
}

impl Default for SystemTestConfig {
	fn default() -> Self {
		Self {
			zbox: Tool::local("./zbox"),
			zwallet: Tool::local("./zwallet"),
			config_dir: "./config".to_string(),
			cli_config: "zbox_config.yaml".to_string(),
			tmp_dir: "tmp".to_string(),
			miner01_id: String::new(),
			sharder01_id: String::new(),
			network_entrypoint: String::new(),
			retry: Retry::default(),
			timeouts: Timeouts::default(),
			chunk_size: DEFAULT_CHUNK_SIZE,
		}
	}
}

impl SystemTestConfig {
	/// Reads the file named by `SYSTEM_TEST_CONFIG`, or `config/system_test.json` when unset.
	/// A missing file is not an error; defaults and the environment still apply.
	pub fn load() -> Result<Self, ConfigError> {
		let file =
			std::env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
		log::info!("Loading system test config from {file} and {ENV_PREFIX}* variables");
		Ok(Self::figment(Path::new(&file)).extract()?)
	}

	/// Like [SystemTestConfig::load] but requires `path` to exist.
	pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		if !path.exists() {
			return Err(ConfigError::MissingFile(path.to_path_buf()));
		}
		Ok(Self::figment(path).extract()?)
	}

	fn figment(file: &Path) -> Figment {
		Figment::from(Serialized::defaults(SystemTestConfig::default()))
			.merge(Json::file(file))
			.merge(Env::prefixed(ENV_PREFIX).split("__"))
	}

	pub fn retry_policy(&self) -> RetryPolicy {
		RetryPolicy::from(&self.retry)
	}
}

use crate::run_command::runner_for;
use cli_model::{Wallet, WalletFile};
use cli_runner::{
	CommandError, CommandRunner, Params, RetryPolicy, ShellRunner, run_with_retry, wait,
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use system_test_config::{SystemTestConfig, Tool};

fn parse_json_line<T: DeserializeOwned>(output: &[String]) -> anyhow::Result<T> {
	let line = output.first().ok_or_else(|| anyhow::anyhow!("Command printed nothing"))?;
	serde_json::from_str(line).map_err(|e| anyhow::anyhow!("Could not parse '{line}': {e}"))
}

/// Arguments every client invocation shares.
#[derive(Clone, Debug)]
struct Invocation {
	cli: String,
	config_dir: String,
	cli_config: String,
	retry: RetryPolicy,
}

impl Invocation {
	fn new(tool: &Tool, config: &SystemTestConfig) -> Self {
		Self {
			cli: tool.cli.clone(),
			config_dir: config.config_dir.clone(),
			cli_config: config.cli_config.clone(),
			retry: config.retry_policy(),
		}
	}

	fn command(&self, subcommand: &str, params: &Params, wallet: &str) -> String {
		let mut parts = vec![self.cli.clone(), subcommand.to_string()];
		if !params.is_empty() {
			parts.push(params.to_string());
		}
		parts.push("--silent".to_string());
		for (key, value) in [
			("wallet", format!("{wallet}_wallet.json")),
			("configDir", self.config_dir.clone()),
			("config", self.cli_config.clone()),
		] {
			parts.push(Params::new().with(key, value).to_string());
		}
		parts.join(" ")
	}

	fn run<R: CommandRunner>(
		&self,
		runner: &R,
		subcommand: &str,
		params: &Params,
		wallet: &str,
		retry: bool,
	) -> Result<Vec<String>, CommandError> {
		let command = self.command(subcommand, params, wallet);
		let policy = if retry { self.retry } else { RetryPolicy::no_retry() };
		run_with_retry(runner, &command, policy)
	}
}

/// Driver of the `zbox` storage client.
pub struct ZboxCli<R = ShellRunner> {
	invocation: Invocation,
	download_settle: Duration,
	runner: R,
}

impl ZboxCli<ShellRunner> {
	pub fn new(config: &SystemTestConfig) -> Self {
		Self::with_runner(config, runner_for(&config.zbox))
	}
}

impl<R: CommandRunner> ZboxCli<R> {
	pub fn with_runner(config: &SystemTestConfig, runner: R) -> Self {
		Self {
			invocation: Invocation::new(&config.zbox, config),
			download_settle: config.timeouts.download_settle(),
			runner,
		}
	}

	pub fn command(&self, subcommand: &str, params: &Params, wallet: &str) -> String {
		self.invocation.command(subcommand, params, wallet)
	}

	fn run(
		&self,
		subcommand: &str,
		params: &Params,
		wallet: &str,
		retry: bool,
	) -> Result<Vec<String>, CommandError> {
		self.invocation.run(&self.runner, subcommand, params, wallet, retry)
	}

	pub fn register(&self, wallet: &str) -> Result<Vec<String>, CommandError> {
		log::info!("Registering wallet {wallet}...");
		self.run("register", &Params::new(), wallet, true)
	}

	pub fn get_wallet(&self, wallet: &str) -> anyhow::Result<Wallet> {
		let output = self.run("getwallet", &Params::new().flag("json"), wallet, true)?;
		parse_json_line(&output)
	}

	/// Creates an allocation. The CLI also writes its id to `<wallet>_allocation.txt`.
	pub fn new_allocation(
		&self,
		wallet: &str,
		params: &Params,
	) -> Result<Vec<String>, CommandError> {
		log::info!("Creating new allocation...");
		let params = params.clone().with("allocationFileName", format!("{wallet}_allocation.txt"));
		self.run("newallocation", &params, wallet, true)
	}

	pub fn update_allocation(
		&self,
		wallet: &str,
		params: &Params,
		retry: bool,
	) -> Result<Vec<String>, CommandError> {
		log::info!("Updating allocation...");
		self.run("updateallocation", params, wallet, retry)
	}

	pub fn upload(&self, wallet: &str, params: &Params) -> Result<Vec<String>, CommandError> {
		log::info!("Uploading file...");
		self.run("upload", params, wallet, true)
	}

	/// Waits for blobbers to settle before downloading.
	pub fn download(
		&self,
		wallet: &str,
		params: &Params,
		retry: bool,
	) -> Result<Vec<String>, CommandError> {
		wait(self.download_settle, "letting blobbers commit before download");
		log::info!("Downloading file...");
		self.run("download", params, wallet, retry)
	}

	pub fn share(&self, wallet: &str, params: &Params) -> Result<Vec<String>, CommandError> {
		log::info!("Sharing file...");
		self.run("share", params, wallet, true)
	}

	pub fn stats(
		&self,
		wallet: &str,
		params: &Params,
		retry: bool,
	) -> Result<Vec<String>, CommandError> {
		log::info!("Getting file stats...");
		self.run("stats", params, wallet, retry)
	}

	pub fn read_pool_lock(
		&self,
		wallet: &str,
		params: &Params,
		retry: bool,
	) -> Result<Vec<String>, CommandError> {
		log::info!("Locking read tokens...");
		self.run("rp-lock", params, wallet, retry)
	}

	pub fn meta(&self, wallet: &str, params: &Params) -> Result<Vec<String>, CommandError> {
		self.run("meta", params, wallet, true)
	}

	pub fn list(&self, wallet: &str, params: &Params) -> Result<Vec<String>, CommandError> {
		self.run("list", params, wallet, true)
	}
}

/// Driver of the `zwallet` token client.
pub struct ZwalletCli<R = ShellRunner> {
	invocation: Invocation,
	runner: R,
}

impl ZwalletCli<ShellRunner> {
	pub fn new(config: &SystemTestConfig) -> Self {
		Self::with_runner(config, runner_for(&config.zwallet))
	}
}

impl<R: CommandRunner> ZwalletCli<R> {
	pub fn with_runner(config: &SystemTestConfig, runner: R) -> Self {
		Self { invocation: Invocation::new(&config.zwallet, config), runner }
	}

	pub fn command(&self, subcommand: &str, params: &Params, wallet: &str) -> String {
		self.invocation.command(subcommand, params, wallet)
	}

	fn run(
		&self,
		subcommand: &str,
		params: &Params,
		wallet: &str,
		retry: bool,
	) -> Result<Vec<String>, CommandError> {
		self.invocation.run(&self.runner, subcommand, params, wallet, retry)
	}

	pub fn faucet(&self, wallet: &str, tokens: f64) -> Result<Vec<String>, CommandError> {
		log::info!("Executing faucet with {tokens} tokens...");
		let params =
			Params::new().with("methodName", "pour").with("tokens", tokens).with("input", "{}");
		self.run("faucet", &params, wallet, true)
	}

	pub fn miner_or_sharder_lock(
		&self,
		wallet: &str,
		params: &Params,
		retry: bool,
	) -> Result<Vec<String>, CommandError> {
		log::info!("Locking tokens against a node...");
		self.run("mn-lock", params, wallet, retry)
	}

	pub fn miner_sharder_pool_info(
		&self,
		wallet: &str,
		params: &Params,
		retry: bool,
	) -> Result<Vec<String>, CommandError> {
		log::info!("Fetching miner or sharder pool info...");
		self.run("mn-pool-info", params, wallet, retry)
	}

	pub fn list_miners(&self, wallet: &str) -> anyhow::Result<cli_model::MinerSCNodes> {
		let output = self.run("ls-miners", &Params::new().flag("json"), wallet, true)?;
		parse_json_line(&output)
	}

	pub fn list_sharders(&self, wallet: &str) -> anyhow::Result<cli_model::Sharders> {
		let output = self.run("ls-sharders", &Params::new().flag("json"), wallet, true)?;
		parse_json_line(&output)
	}
}

/// Reads `<config_dir>/<wallet>_wallet.json` written by `register`.
pub fn read_wallet_file(config: &SystemTestConfig, wallet: &str) -> anyhow::Result<WalletFile> {
	let path = format!("{}/{wallet}_wallet.json", config.config_dir.trim_end_matches('/'));
	let content = std::fs::read_to_string(&path)
		.map_err(|e| anyhow::anyhow!("Could not read wallet file {path}: {e}"))?;
	Ok(serde_json::from_str(&content)?)
}

//! Per test state and the fixtures the suites build on.

use crate::cli_api::{ZboxCli, ZwalletCli};
use crate::run_command::{init_logging, runner_for};
use anyhow::{Context, anyhow, bail};
use cli_model::Wallet;
use cli_runner::files::{create_file_with_size, escaped_test_name, file_name, random_test_file_name};
use cli_runner::hash::checksum;
use cli_runner::output::{extract_allocation_id, extract_auth_ticket, upload_completed_message};
use cli_runner::{CommandRunner, Params, ShellRunner};
use rand::RngCore;
use system_test_config::SystemTestConfig;

pub const DEFAULT_ALLOCATION_LOCK: f64 = 0.5;
pub const DEFAULT_ALLOCATION_SIZE: u64 = 10_000;
pub const DEFAULT_ALLOCATION_EXPIRE: &str = "1h";
pub const DEFAULT_FAUCET_TOKENS: f64 = 1.0;
const THUMBNAIL_SIZE: usize = 4 * 1024;

/// Everything one test needs. The escaped test name doubles as the wallet name, so every test
/// and every [TestContext::child] acts with its own wallet.
pub struct TestContext<R = ShellRunner> {
	test_name: String,
	wallet: String,
	pub config: SystemTestConfig,
	pub zbox: ZboxCli<R>,
	pub zwallet: ZwalletCli<R>,
	zbox_runner: R,
	zwallet_runner: R,
}

impl TestContext<ShellRunner> {
	/// Loads the configuration and prepares the scratch directory.
	pub fn new(test_name: &str) -> anyhow::Result<Self> {
		init_logging();
		let config = SystemTestConfig::load().context("loading system test config")?;
		std::fs::create_dir_all(&config.tmp_dir)
			.with_context(|| format!("creating {}", config.tmp_dir))?;
		let zbox_runner = runner_for(&config.zbox);
		let zwallet_runner = runner_for(&config.zwallet);
		Ok(Self::with_runners(test_name, config, zbox_runner, zwallet_runner))
	}
}

impl<R: CommandRunner + Clone> TestContext<R> {
	pub fn with_runner(test_name: &str, config: SystemTestConfig, runner: R) -> Self {
		Self::with_runners(test_name, config, runner.clone(), runner)
	}

	fn with_runners(
		test_name: &str,
		config: SystemTestConfig,
		zbox_runner: R,
		zwallet_runner: R,
	) -> Self {
		let wallet = escaped_test_name(test_name);
		Self::for_wallet(test_name, wallet, config, zbox_runner, zwallet_runner)
	}

	fn for_wallet(
		test_name: &str,
		wallet: String,
		config: SystemTestConfig,
		zbox_runner: R,
		zwallet_runner: R,
	) -> Self {
		Self {
			test_name: test_name.to_string(),
			wallet,
			zbox: ZboxCli::with_runner(&config, zbox_runner.clone()),
			zwallet: ZwalletCli::with_runner(&config, zwallet_runner.clone()),
			config,
			zbox_runner,
			zwallet_runner,
		}
	}

	/// A nested test, acting with a wallet of its own.
	pub fn child(&self, name: &str) -> Self {
		self.with_runners_of(&format!("{}/{}", self.test_name, name))
	}

	/// Same test, different wallet: `<wallet>_<suffix>`.
	pub fn with_wallet_suffix(&self, suffix: &str) -> Self {
		Self::for_wallet(
			&self.test_name,
			format!("{}_{suffix}", self.wallet),
			self.config.clone(),
			self.zbox_runner.clone(),
			self.zwallet_runner.clone(),
		)
	}

	fn with_runners_of(&self, test_name: &str) -> Self {
		Self::with_runners(
			test_name,
			self.config.clone(),
			self.zbox_runner.clone(),
			self.zwallet_runner.clone(),
		)
	}

	pub fn wallet(&self) -> &str {
		&self.wallet
	}

	pub fn tmp_path(&self, name: &str) -> String {
		format!("{}/{name}", self.config.tmp_dir.trim_end_matches('/'))
	}

	pub fn register_wallet(&self) -> anyhow::Result<Vec<String>> {
		Ok(self.zbox.register(&self.wallet)?)
	}

	pub fn get_wallet(&self) -> anyhow::Result<Wallet> {
		self.zbox.get_wallet(&self.wallet)
	}

	pub fn execute_faucet_with_tokens(&self, tokens: f64) -> anyhow::Result<Vec<String>> {
		Ok(self.zwallet.faucet(&self.wallet, tokens)?)
	}

	pub fn read_pool_lock(&self, tokens: f64) -> anyhow::Result<()> {
		let output =
			self.zbox.read_pool_lock(&self.wallet, &Params::new().with("tokens", tokens), true)?;
		if output != ["locked"] {
			bail!("Unexpected read pool lock output: {output:?}");
		}
		Ok(())
	}

	pub fn register_wallet_and_lock_read_tokens(&self) -> anyhow::Result<()> {
		self.register_wallet()?;
		self.execute_faucet_with_tokens(DEFAULT_FAUCET_TOKENS)?;
		self.read_pool_lock(DEFAULT_FAUCET_TOKENS / 2.0)
	}

	/// Registers the wallet, pours `tokens` (default 1) and creates an allocation with
	/// `lock 0.5, size 10000, expire 1h` unless `extra` overrides them. Returns the allocation id.
	pub fn setup_allocation(&self, extra: Params) -> anyhow::Result<String> {
		let tokens = faucet_tokens(&extra)?;
		let mut extra = extra;
		extra.remove("tokens");

		self.register_wallet()?;
		self.execute_faucet_with_tokens(tokens)?;

		let params = Params::new()
			.with("lock", DEFAULT_ALLOCATION_LOCK)
			.with("size", DEFAULT_ALLOCATION_SIZE)
			.with("expire", DEFAULT_ALLOCATION_EXPIRE)
			.merge(extra);
		let output = self.zbox.new_allocation(&self.wallet, &params)?;
		let first = output.first().ok_or_else(|| anyhow!("newallocation printed nothing"))?;
		let allocation_id = extract_allocation_id(first)?;
		log::info!("Allocation {allocation_id} created for {}", self.wallet);
		Ok(allocation_id)
	}

	/// [TestContext::setup_allocation] plus half of the poured tokens locked in the read pool.
	pub fn setup_allocation_and_read_lock(&self, extra: Params) -> anyhow::Result<String> {
		let tokens = faucet_tokens(&extra)?;
		let allocation_id = self.setup_allocation(extra)?;
		self.read_pool_lock(tokens / 2.0)?;
		Ok(allocation_id)
	}

	pub fn generate_file_and_upload(
		&self,
		allocation_id: &str,
		remotepath: &str,
		size: u64,
	) -> anyhow::Result<String> {
		self.generate_file_and_upload_with_params(allocation_id, remotepath, size, Params::new())
	}

	/// Writes a random local file, uploads it to `remotepath + <file name>` and returns the local
	/// path.
	pub fn generate_file_and_upload_with_params(
		&self,
		allocation_id: &str,
		remotepath: &str,
		size: u64,
		extra: Params,
	) -> anyhow::Result<String> {
		let local_path = random_test_file_name(&self.config.tmp_dir, &self.test_name);
		create_file_with_size(&local_path, size)
			.with_context(|| format!("creating test file {local_path}"))?;
		self.upload(
			Params::new()
				.with("allocation", allocation_id)
				.with("localpath", &local_path)
				.with("remotepath", format!("{remotepath}{}", file_name(&local_path)))
				.merge(extra),
		)?;
		Ok(local_path)
	}

	/// Uploads with `params` and checks the CLI reported completion of the local file.
	pub fn upload(&self, params: Params) -> anyhow::Result<()> {
		let local_path =
			params.value("localpath").ok_or_else(|| anyhow!("upload requires a localpath"))?;
		let expected = upload_completed_message(file_name(local_path));
		let output = self.zbox.upload(&self.wallet, &params)?;
		if output.len() != 2 || output[1] != expected {
			bail!("Unexpected upload output: {output:?}");
		}
		Ok(())
	}

	pub fn generate_checksum(&self, path: &str) -> anyhow::Result<String> {
		log::info!("Generating checksum for file [{path}]...");
		Ok(checksum(&self.zbox_runner, path)?)
	}

	pub fn share_and_extract_ticket(&self, params: Params) -> anyhow::Result<String> {
		let output = self.zbox.share(&self.wallet, &params)?;
		match output.as_slice() {
			[line] => Ok(extract_auth_ticket(line)?),
			_ => bail!("Unexpected share output: {output:?}"),
		}
	}

	/// Writes a stand-in thumbnail to `path` and returns its size.
	pub fn generate_thumbnail(&self, path: &str) -> anyhow::Result<u64> {
		let mut thumbnail = vec![0u8; THUMBNAIL_SIZE];
		rand::rng().fill_bytes(&mut thumbnail);
		std::fs::write(path, &thumbnail).with_context(|| format!("writing thumbnail {path}"))?;
		Ok(thumbnail.len() as u64)
	}
}

fn faucet_tokens(params: &Params) -> anyhow::Result<f64> {
	match params.value("tokens") {
		Some(tokens) => tokens.parse().with_context(|| format!("invalid tokens value '{tokens}'")),
		None => Ok(DEFAULT_FAUCET_TOKENS),
	}
}

use crate::consensus::{Consensus, ConsensusResponse, MinerResponse, evaluate_consensus};
use crate::crypto::{KeyPair, generate_keys, generate_mnemonic};
use crate::model::{ClientPutWalletRequest, ClientPutWalletResponse, NetworkDnsResponse};
use futures::future::join_all;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use system_test_config::{Retry as RetryConfig, SystemTestConfig};
use tokio_retry::{Retry, strategy::FixedInterval};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
	#[error("Could not build HTTP client: {0}")]
	Client(#[source] reqwest::Error),
	#[error("Request to '{url}' failed: {source}")]
	Transport {
		url: String,
		#[source]
		source: reqwest::Error,
	},
	#[error("Could not decode response of '{url}': {source}")]
	Decode {
		url: String,
		#[source]
		source: serde_json::Error,
	},
	#[error("Network discovery at '{0}' returned no miners")]
	NoMiners(String),
	#[error("Invalid mnemonic: {0}")]
	Mnemonic(#[from] bip39::Error),
	#[error("Invalid public key: {0}")]
	PublicKey(#[from] hex::FromHexError),
	#[error("No consensus on {expected}: {}", responses.join(", "))]
	NoConsensus { expected: String, responses: Vec<String> },
}

#[derive(Clone, Debug)]
pub struct ApiClient {
	http: reqwest::Client,
	miners: Vec<String>,
	sharders: Vec<String>,
	attempts: usize,
	delay: Duration,
}

impl ApiClient {
	pub fn new(
		miners: Vec<String>,
		sharders: Vec<String>,
		timeout: Duration,
		retry: &RetryConfig,
	) -> Result<Self, ApiError> {
		let http = reqwest::Client::builder().timeout(timeout).build().map_err(ApiError::Client)?;
		Ok(Self {
			http,
			miners,
			sharders,
			attempts: retry.attempts.max(1),
			delay: Duration::from_secs(retry.delay_secs),
		})
	}

	/// Learns the miners and sharders from `<entrypoint>/network`.
	pub async fn discover(entrypoint: &str, config: &SystemTestConfig) -> Result<Self, ApiError> {
		let client = Self::new(vec![], vec![], config.timeouts.api_request(), &config.retry)?;
		let url = format!("{}/network", entrypoint.trim_end_matches('/'));
		log::info!("Discovering network at {url}");
		let (_, body) = Retry::spawn(client.strategy(), || client.get(&url)).await?;
		let network: NetworkDnsResponse = serde_json::from_str(&body)
			.map_err(|source| ApiError::Decode { url: url.clone(), source })?;
		if network.miners.is_empty() {
			return Err(ApiError::NoMiners(url));
		}
		log::info!("Found {} miners and {} sharders", network.miners.len(), network.sharders.len());
		Ok(Self { miners: network.miners, sharders: network.sharders, ..client })
	}

	pub fn miners(&self) -> &[String] {
		&self.miners
	}

	pub fn sharders(&self) -> &[String] {
		&self.sharders
	}

	/// Registers a wallet with every miner.
	pub async fn v1_client_put(
		&self,
		request: &ClientPutWalletRequest,
		consensus: Consensus,
	) -> Result<ConsensusResponse<ClientPutWalletResponse>, ApiError> {
		let responses = self.post_to_miners("v1/client/put", request).await;
		agree(responses, consensus)
	}

	/// Registers a freshly generated wallet and returns its keys with the miners' verdict.
	pub async fn register_new_wallet(
		&self,
		consensus: Consensus,
	) -> Result<(KeyPair, ConsensusResponse<ClientPutWalletResponse>), ApiError> {
		let keys = generate_keys(&generate_mnemonic()?)?;
		let request = ClientPutWalletRequest::for_keys(&keys)?;
		log::info!("Registering wallet {}", request.id);
		let response = self.v1_client_put(&request, consensus).await?;
		Ok((keys, response))
	}

	fn strategy(&self) -> impl Iterator<Item = Duration> {
		FixedInterval::new(self.delay).take(self.attempts - 1)
	}

	async fn post_to_miners<B: Serialize>(&self, path: &str, body: &B) -> Vec<MinerResponse> {
		join_all(self.miners.iter().map(|miner| self.post(miner, path, body))).await
	}

	async fn post<B: Serialize>(&self, miner: &str, path: &str, body: &B) -> MinerResponse {
		let url = format!("{}/{}", miner.trim_end_matches('/'), path);
		let result = Retry::spawn(self.strategy(), || async {
			log::debug!("POST {url}");
			let response = self
				.http
				.post(&url)
				.json(body)
				.send()
				.await
				.map_err(|source| ApiError::Transport { url: url.clone(), source })?;
			read(&url, response).await
		})
		.await;
		match result {
			Ok((status, body)) => {
				log::debug!("{url} answered {status}: {body}");
				MinerResponse { miner: miner.to_string(), status: Some(status), body }
			},
			Err(err) => {
				log::warn!("{err}");
				MinerResponse { miner: miner.to_string(), status: None, body: err.to_string() }
			},
		}
	}

	async fn get(&self, url: &str) -> Result<(reqwest::StatusCode, String), ApiError> {
		log::debug!("GET {url}");
		let response = self
			.http
			.get(url)
			.send()
			.await
			.map_err(|source| ApiError::Transport { url: url.to_string(), source })?;
		read(url, response).await
	}
}

async fn read(
	url: &str,
	response: reqwest::Response,
) -> Result<(reqwest::StatusCode, String), ApiError> {
	let status = response.status();
	let body = response
		.text()
		.await
		.map_err(|source| ApiError::Transport { url: url.to_string(), source })?;
	Ok((status, body))
}

fn agree<T: DeserializeOwned>(
	responses: Vec<MinerResponse>,
	consensus: Consensus,
) -> Result<ConsensusResponse<T>, ApiError> {
	let Consensus::ByHttpStatus(status) = consensus;
	let Some(agreed) = evaluate_consensus(&responses, consensus) else {
		return Err(ApiError::NoConsensus {
			expected: crate::status_line(status),
			responses: responses.iter().map(MinerResponse::describe).collect(),
		});
	};
	let parsed =
		if status.is_success() { serde_json::from_str(&agreed.body).ok() } else { None };
	Ok(ConsensusResponse { status, body: agreed.body.clone(), parsed })
}

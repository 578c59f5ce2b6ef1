use api_client::crypto::{client_id, generate_keys, generate_mnemonic};
use api_client::model::ClientPutWalletRequest;
use api_client::{ApiClient, Consensus};
use e2e::init_logging;
use pretty_assertions::assert_eq;
use system_test_config::SystemTestConfig;

async fn api_client() -> anyhow::Result<ApiClient> {
	init_logging();
	let config = SystemTestConfig::load()?;
	Ok(ApiClient::discover(&config.network_entrypoint, &config).await?)
}

#[tokio::test]
#[ignore = "requires a running storage network"]
async fn register_wallet_should_succeed() -> anyhow::Result<()> {
	let client = api_client().await?;
	let (keys, response) = client.register_new_wallet(Consensus::ok()).await?;

	assert_eq!(response.status_line(), "200 OK");
	let wallet = response.parsed.ok_or_else(|| anyhow::anyhow!("no wallet in {}", response.body))?;
	assert_eq!(wallet.id, client_id(&keys.public_key_hex())?);
	assert_eq!(wallet.public_key, keys.public_key_hex());
	assert!(wallet.creation_date.is_some_and(|date| date > 0));
	assert!(!wallet.version.is_empty());
	Ok(())
}

#[tokio::test]
#[ignore = "broken on the network side: invalid creation dates are not ignored"]
async fn register_wallet_ignores_invalid_creation_date() -> anyhow::Result<()> {
	let client = api_client().await?;
	let keys = generate_keys(&generate_mnemonic()?)?;
	let request = ClientPutWalletRequest {
		creation_date: Some(-1),
		..ClientPutWalletRequest::for_keys(&keys)?
	};

	let response = client.v1_client_put(&request, Consensus::ok()).await?;
	assert_eq!(response.status_line(), "200 OK");
	let wallet = response.parsed.ok_or_else(|| anyhow::anyhow!("no wallet in {}", response.body))?;
	assert_eq!(wallet.id, request.id);
	assert_eq!(wallet.public_key, keys.public_key_hex());
	assert!(wallet.creation_date.is_some_and(|date| date > 0), "creation date is an invalid value");
	Ok(())
}

async fn assert_bad_request(request: ClientPutWalletRequest) -> anyhow::Result<()> {
	let client = api_client().await?;
	let response = client.v1_client_put(&request, Consensus::bad_request()).await?;
	assert_eq!(response.status_line(), "400 Bad Request");
	assert_eq!(response.parsed, None);
	Ok(())
}

#[tokio::test]
#[ignore = "broken on the network side: invalid client ids are accepted"]
async fn register_wallet_rejects_invalid_client_id() -> anyhow::Result<()> {
	let keys = generate_keys(&generate_mnemonic()?)?;
	assert_bad_request(ClientPutWalletRequest {
		id: "invalid".to_string(),
		public_key: keys.public_key_hex(),
		creation_date: None,
	})
	.await
}

#[tokio::test]
#[ignore = "broken on the network side: invalid public keys are accepted"]
async fn register_wallet_rejects_invalid_public_key() -> anyhow::Result<()> {
	let keys = generate_keys(&generate_mnemonic()?)?;
	assert_bad_request(ClientPutWalletRequest {
		id: client_id(&keys.public_key_hex())?,
		public_key: "invalid".to_string(),
		creation_date: None,
	})
	.await
}

#[tokio::test]
#[ignore = "broken on the network side: empty requests are accepted"]
async fn register_wallet_rejects_empty_body() -> anyhow::Result<()> {
	assert_bad_request(ClientPutWalletRequest::default()).await
}

use serde::{Deserialize, Serialize};

/// Output of `zbox getwallet --json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wallet {
	pub client_id: String,
	pub client_public_key: String,
	pub encryption_public_key: String,
}

/// Content of a `<name>_wallet.json` file in the CLI config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletFile {
	pub client_id: String,
	pub client_key: String,
	pub keys: Vec<KeyPair>,
	#[serde(rename = "mnemonics")]
	pub mnemonic: String,
	pub version: String,
	pub date_created: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyPair {
	pub public_key: String,
	pub private_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendTransaction {
	pub status: String,
	#[serde(rename = "tx")]
	pub txn: String,
	pub nonce: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeStorageMarker {
	#[serde(skip_serializing_if = "String::is_empty")]
	pub assigner: String,
	pub recipient: String,
	pub free_tokens: f64,
	pub timestamp: i64,
	#[serde(skip_serializing_if = "String::is_empty")]
	pub signature: String,
}

use crate::crypto::{KeyPair, client_id};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientPutWalletRequest {
	pub id: String,
	pub public_key: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub creation_date: Option<i64>,
}

impl ClientPutWalletRequest {
	pub fn for_keys(keys: &KeyPair) -> Result<Self, hex::FromHexError> {
		let public_key = keys.public_key_hex();
		Ok(Self { id: client_id(&public_key)?, public_key, creation_date: None })
	}
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientPutWalletResponse {
	pub id: String,
	#[serde(default)]
	pub version: String,
	#[serde(default)]
	pub creation_date: Option<i64>,
	pub public_key: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkDnsResponse {
	#[serde(default)]
	pub miners: Vec<String>,
	#[serde(default)]
	pub sharders: Vec<String>,
}

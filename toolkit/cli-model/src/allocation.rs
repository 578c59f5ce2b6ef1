use crate::node::StakePoolSettings;
use serde::{Deserialize, Serialize};

/// A storage reservation as reported by `zbox getallocation --json`.
///
/// `time_unit` and `challenge_completion_time` are durations in nanoseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Allocation {
	pub id: String,
	pub tx: String,
	pub name: String,
	pub expiration_date: i64,
	pub data_shards: i32,
	pub parity_shards: i32,
	pub size: i64,
	#[serde(rename = "owner_id")]
	pub owner: String,
	pub owner_public_key: String,
	#[serde(rename = "payer_id")]
	pub payer: String,
	pub blobbers: Vec<Blobber>,
	pub time_unit: i64,
	pub is_immutable: bool,
	pub write_pool: i64,
	/// Terms actually in effect for each blobber, weighted if the allocation was updated.
	pub blobber_details: Vec<BlobberAllocation>,
	pub read_price_range: PriceRange,
	pub write_price_range: PriceRange,
	pub challenge_completion_time: i64,
	pub start_time: i64,
	#[serde(skip_serializing_if = "std::ops::Not::not")]
	pub finalized: bool,
	#[serde(skip_serializing_if = "std::ops::Not::not")]
	pub canceled: bool,
	#[serde(skip_serializing_if = "is_zero")]
	pub moved_to_challenge: i64,
	#[serde(skip_serializing_if = "is_zero")]
	pub moved_back: i64,
	#[serde(skip_serializing_if = "is_zero")]
	pub moved_to_validators: i64,
	pub curators: Vec<String>,
}

fn is_zero(value: &i64) -> bool {
	*value == 0
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blobber {
	pub id: String,
	#[serde(rename = "url")]
	pub base_url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceRange {
	pub min: i64,
	pub max: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Terms {
	pub read_price: i64,
	pub write_price: i64,
	pub min_lock_demand: f64,
	/// Nanoseconds.
	pub max_offer_duration: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobberAllocation {
	pub blobber_id: String,
	pub size: i64,
	pub terms: Terms,
	pub min_lock_demand: i64,
	pub spent: i64,
	pub penalty: i64,
	pub read_reward: i64,
	pub returned: i64,
	pub challenge_reward: i64,
	pub final_reward: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	pub delegate_wallet: String,
	pub min_stake: i64,
	pub max_stake: i64,
	pub num_delegates: i32,
	pub service_charge: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobberInfo {
	pub id: String,
	pub url: String,
	pub capacity: i64,
	pub last_health_check: i64,
	pub allocated: i64,
	pub terms: Terms,
	pub stake_pool_settings: Settings,
}

/// Blobber as listed by `zbox ls-blobbers --json`. The public key is never part of the output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobberDetails {
	pub id: String,
	#[serde(rename = "url")]
	pub base_url: String,
	pub terms: Terms,
	pub capacity: i64,
	pub allocated: i64,
	pub last_health_check: i64,
	#[serde(skip)]
	pub public_key: String,
	pub stake_pool_settings: StakePoolSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Validator {
	#[serde(rename = "validator_id")]
	pub id: String,
	#[serde(rename = "url")]
	pub base_url: String,
	#[serde(skip)]
	pub public_key: String,
	pub delegate_wallet: String,
	pub min_stake: i64,
	pub max_stake: i64,
	pub num_delegates: i32,
	pub service_charge: f64,
	#[serde(rename = "stake")]
	pub total_stake: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadPoolInfo {
	pub balance: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChallengePoolInfo {
	pub id: String,
	pub balance: i64,
	pub start_time: i64,
	pub expiration: i64,
	pub finalized: bool,
}

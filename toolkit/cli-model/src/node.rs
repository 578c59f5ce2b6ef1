use crate::ModelError;
use crate::currency::Coin;
use crate::provider::PoolStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakePoolSettings {
	/// Wallet of the pool owner.
	pub delegate_wallet: String,
	pub min_stake: Coin,
	pub max_stake: Coin,
	#[serde(rename = "num_delegates")]
	pub max_num_delegates: i32,
	pub service_charge: f64,
}

/// Output of `zbox sp-info --json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakePoolInfo {
	#[serde(rename = "pool_id")]
	pub id: String,
	pub balance: i64,
	pub unstake: i64,
	/// Free staked space.
	pub free: i64,
	pub capacity: i64,
	pub write_price: i64,
	pub offers_total: i64,
	pub unstake_total: i64,
	pub delegate: Vec<StakePoolDelegatePoolInfo>,
	pub penalty: i64,
	pub rewards: i64,
	pub settings: StakePoolSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakePoolDelegatePoolInfo {
	pub id: String,
	pub balance: i64,
	pub delegate_id: String,
	pub rewards: i64,
	#[serde(rename = "unstake")]
	pub un_stake: bool,
	pub total_reward: i64,
	pub total_penalty: i64,
	pub status: String,
	pub round_created: i64,
}

/// Output of `zwallet mn-pool-info`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegatePool {
	pub balance: i64,
	pub reward: i64,
	pub status: i32,
	/// Round the pool was created in, used for the unlock cool down.
	pub round_created: i64,
	pub delegate_id: String,
}

impl DelegatePool {
	pub fn pool_status(&self) -> Result<PoolStatus, ModelError> {
		PoolStatus::try_from(self.status)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakePool {
	pub pools: HashMap<String, DelegatePool>,
	#[serde(rename = "rewards")]
	pub reward: i64,
	pub settings: StakePoolSettings,
	pub minter: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleNode {
	pub id: String,
	pub n2n_host: String,
	pub host: String,
	pub port: i32,
	pub public_key: String,
	pub short_name: String,
	pub build_tag: String,
	pub total_stake: i64,
	pub stat: serde_json::Value,
}

/// Miner or sharder entry of `zwallet ls-miners --json` / `ls-sharders --json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Node {
	pub simple_miner: SimpleNode,
	pub stake_pool: StakePool,
	pub round: i64,
	pub total_reward: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeList {
	#[serde(rename = "Nodes")]
	pub nodes: Vec<Node>,
}

pub type MinerSCNodes = NodeList;

/// `ls-sharders --json` output, keyed by sharder id.
pub type Sharders = HashMap<String, Sharder>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sharder {
	pub id: String,
	pub version: String,
	pub creation_date: i64,
	pub public_key: String,
	pub n2n_host: String,
	pub host: String,
	pub port: i32,
	pub path: String,
	#[serde(rename = "type")]
	pub node_type: i32,
	pub description: String,
	pub set_index: i32,
	pub status: i32,
	pub info: SharderInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharderInfo {
	pub build_tag: String,
	pub state_missing_nodes: i64,
	pub miners_median_network_time: i64,
	pub avg_block_txns: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Miner {
	pub id: String,
	pub n2n_host: String,
	pub host: String,
	pub port: i32,
	pub public_key: String,
	pub short_name: String,
	pub build_tag: String,
	pub total_stake: i64,
	pub delegate_wallet: String,
	pub service_charge: f64,
	pub number_of_delegates: i32,
	pub min_stake: i64,
	pub max_stake: i64,
	pub stat: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinerSCDelegatePoolInfo {
	pub id: String,
	pub balance: i64,
	/// Uncollected reward.
	pub reward: i64,
	/// Total reward paid out over the pool's lifetime.
	pub reward_paid: i64,
	pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinerSCUserPoolsInfo {
	pub pools: HashMap<String, Vec<MinerSCDelegatePoolInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockConfig {
	#[serde(rename = "ID")]
	pub id: String,
	pub simple_global_node: SimpleGlobalNode,
	pub min_lock_period: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleGlobalNode {
	pub max_mint: i64,
	pub total_minted: i64,
	pub min_lock: i64,
	pub apr: f64,
	pub owner_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolStats {
	pub delegate_id: String,
	pub high: i64,
	pub low: i64,
	pub interest_paid: i64,
	pub reward_paid: i64,
	#[serde(rename = "number_rounds")]
	pub num_rounds: i64,
	pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenPool {
	pub id: String,
	pub balance: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZCNLockingPool {
	pub pool: TokenPool,
}

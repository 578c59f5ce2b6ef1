use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Seconds since the unix epoch, as used in file listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocationFile {
	pub name: String,
	pub path: String,
	#[serde(rename = "type")]
	pub file_type: String,
	pub size: i64,
	pub hash: String,
}

/// Entry of `zbox list --json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListFileResult {
	pub name: String,
	pub path: String,
	#[serde(rename = "type")]
	pub file_type: String,
	pub size: i64,
	pub hash: String,
	pub mimetype: String,
	pub num_blocks: i64,
	pub lookup_hash: String,
	pub encryption_key: String,
	pub actual_size: i64,
	pub actual_num_blocks: i64,
	pub created_at: Timestamp,
	pub updated_at: Timestamp,
}

/// Output of `zbox meta --json`. The CLI prints Go field names verbatim here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FileMetaResult {
	pub name: String,
	pub path: String,
	#[serde(rename = "Type")]
	pub file_type: String,
	pub size: i64,
	pub actual_file_size: i64,
	pub lookup_hash: String,
	pub hash: String,
	pub mime_type: String,
	pub actual_num_blocks: i64,
	pub encrypted_key: String,
	pub commit_meta_txns: Vec<CommitMetaTxn>,
	pub collaborators: Vec<Collaborator>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitMetaTxn {
	pub ref_id: i64,
	pub txn_id: String,
	pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collaborator {
	pub ref_id: i64,
	pub client_id: String,
	pub created_at: String,
}

/// Response printed after `--commit`: `Commit Metadata successful, Response : <json>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitResponse {
	#[serde(rename = "TxnID")]
	pub txn_id: String,
	#[serde(rename = "MetaData")]
	pub metadata: CommitMetaData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CommitMetaData {
	pub name: String,
	#[serde(rename = "Type")]
	pub file_type: String,
	pub path: String,
	pub lookup_hash: String,
	pub hash: String,
	pub mime_type: String,
	pub encrypted_key: String,
	pub size: i64,
	pub actual_file_size: i64,
	pub actual_num_blocks: i64,
	pub commit_meta_txns: Vec<CommitMetaTxn>,
	pub collaborators: Vec<Collaborator>,
}

/// Per-blobber statistics of one file, as printed by `zbox stats --json` keyed by blobber id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStats {
	pub name: String,
	pub size: i64,
	pub path_hash: String,
	pub path: String,
	pub num_of_blocks: i64,
	pub num_of_updates: i64,
	pub num_of_block_downloads: i64,
	#[serde(rename = "num_of_failed_challenges")]
	pub num_of_challenges: i64,
	pub last_challenge_txn: String,
	pub write_marker_txn: String,
	pub blobber_id: String,
	pub blobber_url: String,
	pub blockchain_aware: bool,
	#[serde(rename = "CreatedAt", with = "time::serde::rfc3339::option")]
	pub created_at: Option<OffsetDateTime>,
}

impl FileStats {
	/// A blobber that has no record of the file reports all-zero statistics.
	pub fn is_empty(&self) -> bool {
		self.name.is_empty()
			&& self.path.is_empty()
			&& self.path_hash.is_empty()
			&& self.size == 0
			&& self.num_of_blocks == 0
			&& self.num_of_block_downloads == 0
			&& self.num_of_challenges == 0
			&& self.num_of_updates == 0
			&& self.write_marker_txn.is_empty()
			&& self.last_challenge_txn.is_empty()
			&& self.blobber_id.is_empty()
			&& self.blobber_url.is_empty()
			&& !self.blockchain_aware
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDiff {
	#[serde(rename = "operation")]
	pub op: String,
	pub path: String,
	#[serde(rename = "type")]
	pub file_type: String,
}

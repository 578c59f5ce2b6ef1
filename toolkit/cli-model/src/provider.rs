use crate::ModelError;
use std::fmt::{Display, Formatter};

/// Kind of network participant a stake pool is locked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
	Miner = 1,
	Sharder,
	Blobber,
	Validator,
	Authorizer,
}

impl Provider {
	pub fn as_str(&self) -> &'static str {
		match self {
			Provider::Miner => "miner",
			Provider::Sharder => "sharder",
			Provider::Blobber => "blobber",
			Provider::Validator => "validator",
			Provider::Authorizer => "authorizer",
		}
	}
}

impl Display for Provider {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl TryFrom<i32> for Provider {
	type Error = ModelError;

	fn try_from(value: i32) -> Result<Self, Self::Error> {
		match value {
			1 => Ok(Provider::Miner),
			2 => Ok(Provider::Sharder),
			3 => Ok(Provider::Blobber),
			4 => Ok(Provider::Validator),
			5 => Ok(Provider::Authorizer),
			other => Err(ModelError::UnknownProvider(other)),
		}
	}
}

/// Lifecycle of a delegate pool, encoded as an integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolStatus {
	Active = 0,
	Pending,
	Inactive,
	Unstaking,
	Deleting,
	Deleted,
}

impl PoolStatus {
	pub fn as_str(&self) -> &'static str {
		match self {
			PoolStatus::Active => "active",
			PoolStatus::Pending => "pending",
			PoolStatus::Inactive => "inactive",
			PoolStatus::Unstaking => "unstaking",
			PoolStatus::Deleting => "deleting",
			PoolStatus::Deleted => "deleted",
		}
	}
}

impl Display for PoolStatus {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl TryFrom<i32> for PoolStatus {
	type Error = ModelError;

	fn try_from(value: i32) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(PoolStatus::Active),
			1 => Ok(PoolStatus::Pending),
			2 => Ok(PoolStatus::Inactive),
			3 => Ok(PoolStatus::Unstaking),
			4 => Ok(PoolStatus::Deleting),
			5 => Ok(PoolStatus::Deleted),
			other => Err(ModelError::UnknownPoolStatus(other)),
		}
	}
}

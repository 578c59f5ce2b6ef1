//! Types mirroring the JSON documents printed by the `zbox` and `zwallet` command line clients.
//!
//! These carry no behaviour of their own. Every struct decodes missing fields to their zero
//! value, so a partially populated response still deserializes.

pub mod allocation;
pub mod currency;
pub mod file;
pub mod node;
pub mod provider;
pub mod wallet;

pub use allocation::*;
pub use currency::Coin;
pub use file::*;
pub use node::*;
pub use provider::{PoolStatus, Provider};
pub use wallet::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
	#[error("Unknown provider type: {0}")]
	UnknownProvider(i32),
	#[error("Unknown pool status: {0}")]
	UnknownPoolStatus(i32),
}

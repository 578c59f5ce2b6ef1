//! Calls the miners' REST API directly and checks that enough of them agree on the outcome.

mod client;
mod consensus;
pub mod crypto;
pub mod model;

pub use client::{ApiClient, ApiError};
pub use consensus::{Consensus, ConsensusResponse, MinerResponse, evaluate_consensus, status_line};
pub use reqwest::StatusCode;

use reqwest::StatusCode;

/// What miners must agree on for a fanned out request to count as answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consensus {
	ByHttpStatus(StatusCode),
}

impl Consensus {
	pub fn ok() -> Self {
		Consensus::ByHttpStatus(StatusCode::OK)
	}

	pub fn bad_request() -> Self {
		Consensus::ByHttpStatus(StatusCode::BAD_REQUEST)
	}

	fn accepts(&self, response: &MinerResponse) -> bool {
		match self {
			Consensus::ByHttpStatus(expected) => response.status == Some(*expected),
		}
	}
}

/// One miner's answer. `status` is `None` when the request never got a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinerResponse {
	pub miner: String,
	pub status: Option<StatusCode>,
	pub body: String,
}

impl MinerResponse {
	pub fn describe(&self) -> String {
		match self.status {
			Some(status) => format!("{}: {}", self.miner, status_line(status)),
			None => format!("{}: {}", self.miner, self.body),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusResponse<T> {
	pub status: StatusCode,
	pub body: String,
	/// Decoded body, only for successful statuses.
	pub parsed: Option<T>,
}

impl<T> ConsensusResponse<T> {
	pub fn status_line(&self) -> String {
		status_line(self.status)
	}
}

/// Renders a status the way HTTP status lines show it, e.g. `400 Bad Request`.
pub fn status_line(status: StatusCode) -> String {
	match status.canonical_reason() {
		Some(reason) => format!("{} {}", status.as_u16(), reason),
		None => status.as_u16().to_string(),
	}
}

/// Returns the first accepted response if a strict majority of all responses is accepted.
pub fn evaluate_consensus<'a>(
	responses: &'a [MinerResponse],
	consensus: Consensus,
) -> Option<&'a MinerResponse> {
	let accepted: Vec<&MinerResponse> = responses.iter().filter(|r| consensus.accepts(r)).collect();
	if !accepted.is_empty() && accepted.len() * 2 > responses.len() {
		accepted.first().copied()
	} else {
		None
	}
}

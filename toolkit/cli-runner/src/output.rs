//! Extraction of identifiers and tickets from lines printed by `zbox` and `zwallet`.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutputParseError {
	#[error("Expected {expected} in output line: '{line}'")]
	NoMatch { expected: &'static str, line: String },
}

fn regex(pattern: &str) -> Regex {
	match Regex::new(pattern) {
		Ok(regex) => regex,
		Err(err) => panic!("invalid built-in pattern {pattern}: {err}"),
	}
}

static AUTH_TICKET: Lazy<Regex> = Lazy::new(|| regex(r"^Auth token :(.*)$"));
static ALLOCATION_CREATED: Lazy<Regex> =
	Lazy::new(|| regex(r"^Allocation created: ([a-f0-9]{64})$"));
static COMMIT_RESPONSE: Lazy<Regex> =
	Lazy::new(|| regex(r"^Commit Metadata successful, Response : (.*)$"));
static LOCKED_WITH: Lazy<Regex> = Lazy::new(|| regex(r"locked with: ([a-f0-9]{64})"));
static ALLOCATION_UPDATED: Lazy<Regex> =
	Lazy::new(|| regex(r"^Allocation updated with txId : ([a-f0-9]{64})$"));

fn capture(regex: &Regex, line: &str, expected: &'static str) -> Result<String, OutputParseError> {
	regex
		.captures(line.trim())
		.and_then(|captures| captures.get(1))
		.map(|m| m.as_str().to_string())
		.ok_or_else(|| OutputParseError::NoMatch { expected, line: line.to_string() })
}

/// Returns the auth ticket printed by `zbox share`. The ticket is opaque and kept verbatim.
pub fn extract_auth_ticket(line: &str) -> Result<String, OutputParseError> {
	let ticket = capture(&AUTH_TICKET, line, "auth ticket")?;
	if ticket.is_empty() {
		return Err(OutputParseError::NoMatch { expected: "auth ticket", line: line.to_string() });
	}
	Ok(ticket)
}

pub fn extract_allocation_id(line: &str) -> Result<String, OutputParseError> {
	capture(&ALLOCATION_CREATED, line, "allocation id")
}

/// Returns the JSON document following the commit confirmation printed by `download --commit`.
pub fn extract_commit_response(line: &str) -> Result<String, OutputParseError> {
	capture(&COMMIT_RESPONSE, line, "commit metadata response")
}

pub fn extract_lock_txn(line: &str) -> Result<String, OutputParseError> {
	capture(&LOCKED_WITH, line, "lock transaction hash")
}

pub fn extract_allocation_update_txn(line: &str) -> Result<String, OutputParseError> {
	capture(&ALLOCATION_UPDATED, line, "allocation update transaction hash")
}

pub fn download_completed_message(file_name: &str) -> String {
	format!("Status completed callback. Type = application/octet-stream. Name = {file_name}")
}

pub fn upload_completed_message(file_name: &str) -> String {
	download_completed_message(file_name)
}

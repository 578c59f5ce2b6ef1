use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Timed out after {timeout:?} waiting until {description}")]
pub struct WaitTimeout {
	pub description: String,
	pub timeout: Duration,
}

pub fn wait(duration: Duration, reason: &str) {
	log::info!("WAITING {duration:?}: {reason}");
	std::thread::sleep(duration);
}

/// Polls `condition` every `poll_interval` until it yields a value or `timeout` elapses.
pub fn wait_until<T, F>(
	description: &str,
	condition: F,
	timeout: Duration,
	poll_interval: Duration,
) -> Result<T, WaitTimeout>
where
	F: Fn() -> Option<T>,
{
	log::info!("WAIT UNTIL: {description}. TIMEOUT: {timeout:?}, POLL_INTERVAL: {poll_interval:?}");
	let start = Instant::now();
	loop {
		if let Some(result) = condition() {
			return Ok(result);
		}
		if start.elapsed() >= timeout {
			return Err(WaitTimeout { description: description.to_string(), timeout });
		}
		std::thread::sleep(poll_interval);
	}
}

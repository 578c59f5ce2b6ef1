use std::io::Read;
use std::process::{Command, Stdio};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
	#[error("Could not run '{command}': {source}")]
	Spawn {
		command: String,
		#[source]
		source: std::io::Error,
	},
	#[error("'{command}' failed with exit code {status:?}: {}", output.join("\n"))]
	Failed { command: String, status: Option<i32>, output: Vec<String> },
}

impl CommandError {
	/// Lines printed by a command that ran but failed. Empty if the command never started.
	pub fn output(&self) -> &[String] {
		match self {
			CommandError::Spawn { .. } => &[],
			CommandError::Failed { output, .. } => output,
		}
	}

	pub fn status(&self) -> Option<i32> {
		match self {
			CommandError::Spawn { .. } => None,
			CommandError::Failed { status, .. } => *status,
		}
	}
}

/// Executes a command line and returns its combined output split into lines.
pub trait CommandRunner {
	fn run(&self, command: &str) -> Result<Vec<String>, CommandError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
	fn run(&self, command: &str) -> Result<Vec<String>, CommandError> {
		(**self).run(command)
	}
}

/// Runs commands through `sh -c`, optionally wrapped in another shell such as
/// `docker exec <container> bash -c`.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
	pub shell: Option<String>,
}

impl ShellRunner {
	pub fn new(shell: Option<String>) -> Self {
		ShellRunner { shell }
	}

	/// Builds the `sh -c` script. stderr is redirected for the whole script, so every
	/// command of a compound line reports into the same output.
	fn wrap(&self, raw_command: &str) -> Result<String, shlex::QuoteError> {
		let command = raw_command.replace('\n', " ");
		Ok(match &self.shell {
			Some(shell) => format!("exec 2>&1; {shell} {}", shlex::try_quote(&command)?),
			None => format!("exec 2>&1; {command}"),
		})
	}
}

impl CommandRunner for ShellRunner {
	fn run(&self, raw_command: &str) -> Result<Vec<String>, CommandError> {
		let spawn_error = |source: std::io::Error| CommandError::Spawn {
			command: raw_command.to_string(),
			source,
		};
		let command = self
			.wrap(raw_command)
			.map_err(|e| spawn_error(std::io::Error::new(std::io::ErrorKind::InvalidInput, e)))?;
		log::info!("RUNNING: {command}");

		let mut child = Command::new("sh")
			.arg("-c")
			.arg(&command)
			.stdout(Stdio::piped())
			.stderr(Stdio::null())
			.spawn()
			.map_err(spawn_error)?;

		let mut raw_output = Vec::new();
		if let Some(stdout) = child.stdout.as_mut() {
			stdout.read_to_end(&mut raw_output).map_err(spawn_error)?;
		}
		let status = child.wait().map_err(spawn_error)?;

		let output = split_lines(&String::from_utf8_lossy(&raw_output));
		if status.success() {
			Ok(output)
		} else {
			Err(CommandError::Failed {
				command: raw_command.to_string(),
				status: status.code(),
				output,
			})
		}
	}
}

/// Trims the whole output and splits it into lines. Empty output yields a single empty line.
pub fn split_lines(raw: &str) -> Vec<String> {
	raw.replace('\r', "").trim().split('\n').map(str::to_string).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
	/// Total number of runs, including the first.
	pub attempts: usize,
	pub delay: Duration,
}

impl RetryPolicy {
	pub fn new(attempts: usize, delay: Duration) -> Self {
		Self { attempts, delay }
	}

	pub fn no_retry() -> Self {
		Self { attempts: 1, delay: Duration::ZERO }
	}
}

impl Default for RetryPolicy {
	fn default() -> Self {
		Self { attempts: 3, delay: Duration::from_secs(2) }
	}
}

/// Runs `command` until it succeeds or the policy's attempts are exhausted,
/// returning the last failure.
pub fn run_with_retry<R: CommandRunner + ?Sized>(
	runner: &R,
	command: &str,
	policy: RetryPolicy,
) -> Result<Vec<String>, CommandError> {
	let attempts = policy.attempts.max(1);
	let mut attempt = 1;
	loop {
		match runner.run(command) {
			Ok(output) => return Ok(output),
			Err(err) if attempt < attempts => {
				log::warn!("Attempt {attempt}/{attempts} failed: {err}");
				attempt += 1;
				std::thread::sleep(policy.delay);
			},
			Err(err) => return Err(err),
		}
	}
}

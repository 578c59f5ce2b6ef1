use cli_runner::ShellRunner;
use system_test_config::Tool;

/// Initialises logging once per test binary. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
	let _ = env_logger::builder()
		.is_test(true)
		.filter_level(log::LevelFilter::Info)
		.parse_default_env()
		.try_init();
}

pub fn runner_for(tool: &Tool) -> ShellRunner {
	ShellRunner::new(tool.shell.clone())
}

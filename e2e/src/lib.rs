//! End to end tests of a storage network through its `zbox` and `zwallet` clients and the miners'
//! REST API.
//!
//! The suites under `tests/` need a running network and are ignored by default. Point
//! `SYSTEM_TEST_CONFIG` at a config file (or set `SYSTEM_TEST__*` variables) and run
//! `cargo test -p e2e -- --ignored`.
//!
//! Fixtures are methods of [TestContext]. Nested scenarios that need a second wallet derive one
//! with [TestContext::child].

pub mod cli_api;
pub mod conftest;
pub mod run_command;

pub use cli_api::{ZboxCli, ZwalletCli, read_wallet_file};
pub use conftest::TestContext;
pub use run_command::init_logging;

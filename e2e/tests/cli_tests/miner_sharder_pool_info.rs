use crate::expect_failure;
use cli_model::DelegatePool;
use cli_runner::Params;
use cli_runner::output::extract_lock_txn;
use e2e::TestContext;
use pretty_assertions::assert_eq;

fn lock_and_fetch_pool_info(
	ctx: &TestContext,
	node_id: &str,
	faucet: f64,
	tokens: u32,
) -> anyhow::Result<()> {
	anyhow::ensure!(!node_id.is_empty(), "node id is not configured");
	ctx.register_wallet()?;
	ctx.execute_faucet_with_tokens(faucet)?;

	let output = ctx.zwallet.miner_or_sharder_lock(
		ctx.wallet(),
		&Params::new().with("id", node_id).with("tokens", tokens),
		true,
	)?;
	assert_eq!(output.len(), 1, "{output:?}");
	extract_lock_txn(&output[0])?;

	let pool_params = Params::new().with("id", node_id);
	let output = ctx.zwallet.miner_sharder_pool_info(ctx.wallet(), &pool_params, true)?;
	assert_eq!(output.len(), 1, "{output:?}");
	let _pool: DelegatePool = serde_json::from_str(&output[0])?;
	Ok(())
}

#[test]
#[ignore = "requires a running storage network"]
fn miner_pool_info_after_locking_against_miner_should_work() -> anyhow::Result<()> {
	let ctx = TestContext::new("Miner pool info after locking against miner should work")?;
	let miner = ctx.config.miner01_id.clone();
	lock_and_fetch_pool_info(&ctx, &miner, 2.0, 1)
}

#[test]
#[ignore = "requires a running storage network"]
fn miner_pool_info_after_locking_against_sharder_should_work() -> anyhow::Result<()> {
	let ctx = TestContext::new("Miner pool info after locking against sharder should work")?;
	let sharder = ctx.config.sharder01_id.clone();
	lock_and_fetch_pool_info(&ctx, &sharder, 9.0, 5)
}

#[test]
#[ignore = "requires a running storage network"]
fn pool_info_for_invalid_node_id_should_fail() -> anyhow::Result<()> {
	let ctx = TestContext::new("Miner/Sharder pool info for invalid node id should fail")?;
	ctx.register_wallet()?;

	let output = expect_failure(ctx.zwallet.miner_sharder_pool_info(
		ctx.wallet(),
		&Params::new().with("id", "abcdefgh"),
		false,
	))?;
	assert_eq!(
		output,
		vec![
			r#"fatal:{"code":"resource_not_found","error":"resource_not_found: can't get miner node: value not present"}"#
		]
	);
	Ok(())
}

use multiversx_sc_scenario::imports::*;

use green_dex::green_dex_proxy;
use green_token::green_token_proxy;

const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
const MANUFACTURER_ADDRESS: TestAddress = TestAddress::new("manufacturer");
const CONSUMER_ADDRESS: TestAddress = TestAddress::new("consumer");

const DEX_ADDRESS: TestSCAddress = TestSCAddress::new("green-dex");
const TOKEN_ADDRESS: TestSCAddress = TestSCAddress::new("green-token");

const DEX_CODE_PATH: MxscPath = MxscPath::new("output/green-dex.mxsc.json");
const TOKEN_CODE_PATH: MxscPath = MxscPath::new("../green-token/output/green-token.mxsc.json");

const CONSUMER_EGLD: u64 = 100;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(DEX_CODE_PATH, green_dex::ContractBuilder);
    blockchain.register_contract(TOKEN_CODE_PATH, green_token::ContractBuilder);
    blockchain
}

/// Deploys the ledger bound to the exchange's (predetermined) address,
/// then the exchange bound to the ledger's.
fn setup() -> ScenarioWorld {
    let mut world = world();

    world.account(OWNER_ADDRESS).nonce(1);
    world.account(MANUFACTURER_ADDRESS).nonce(1).balance(1_000u64);
    world.account(CONSUMER_ADDRESS).nonce(1).balance(CONSUMER_EGLD);

    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(green_token_proxy::GreenTokenProxy)
        .init(DEX_ADDRESS)
        .code(TOKEN_CODE_PATH)
        .new_address(TOKEN_ADDRESS)
        .run();

    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(green_dex_proxy::GreenDexProxy)
        .init(TOKEN_ADDRESS)
        .code(DEX_CODE_PATH)
        .new_address(DEX_ADDRESS)
        .run();

    world
}

fn balance_of(world: &mut ScenarioWorld, address: TestAddress) -> RustBigUint {
    world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(green_token_proxy::GreenTokenProxy)
        .balance_of(address)
        .returns(ReturnsResultUnmanaged)
        .run()
}

#[test]
fn buy_rejects_zero_deposit() {
    let mut world = setup();

    world
        .tx()
        .from(MANUFACTURER_ADDRESS)
        .to(DEX_ADDRESS)
        .typed(green_dex_proxy::GreenDexProxy)
        .buy()
        .egld(0u64)
        .with_result(ExpectError(4, "No value deposited"))
        .run();
}

#[test]
fn buy_mints_one_token_per_unit_deposited() {
    let mut world = setup();

    world
        .tx()
        .from(MANUFACTURER_ADDRESS)
        .to(DEX_ADDRESS)
        .typed(green_dex_proxy::GreenDexProxy)
        .buy()
        .egld(10u64)
        .run();

    assert_eq!(
        balance_of(&mut world, MANUFACTURER_ADDRESS),
        RustBigUint::from(10u64)
    );
    world.check_account(MANUFACTURER_ADDRESS).balance(990u64);
    world.check_account(DEX_ADDRESS).balance(10u64);
}

#[test]
fn sell_rejects_zero_amount() {
    let mut world = setup();

    world
        .tx()
        .from(CONSUMER_ADDRESS)
        .to(DEX_ADDRESS)
        .typed(green_dex_proxy::GreenDexProxy)
        .sell(0u64)
        .with_result(ExpectError(4, "Amount must be more than zero"))
        .run();
}

#[test]
fn sell_rejects_without_prior_approval() {
    let mut world = setup();

    world
        .tx()
        .from(CONSUMER_ADDRESS)
        .to(DEX_ADDRESS)
        .typed(green_dex_proxy::GreenDexProxy)
        .buy()
        .egld(30u64)
        .run();

    world
        .tx()
        .from(CONSUMER_ADDRESS)
        .to(DEX_ADDRESS)
        .typed(green_dex_proxy::GreenDexProxy)
        .sell(10u64)
        .with_result(ExpectError(4, "Insufficient allowance"))
        .run();
}

#[test]
fn sell_rejects_amount_above_balance() {
    // The approval covers the amount, the balance does not.
    let mut world = setup();

    world
        .tx()
        .from(CONSUMER_ADDRESS)
        .to(DEX_ADDRESS)
        .typed(green_dex_proxy::GreenDexProxy)
        .buy()
        .egld(30u64)
        .run();

    world
        .tx()
        .from(CONSUMER_ADDRESS)
        .to(TOKEN_ADDRESS)
        .typed(green_token_proxy::GreenTokenProxy)
        .approve(DEX_ADDRESS, 40u64)
        .run();

    world
        .tx()
        .from(CONSUMER_ADDRESS)
        .to(DEX_ADDRESS)
        .typed(green_dex_proxy::GreenDexProxy)
        .sell(40u64)
        .with_result(ExpectError(4, "Insufficient balance"))
        .run();
}

#[test]
fn sell_burns_tokens_and_releases_egld() {
    let mut world = setup();

    world
        .tx()
        .from(CONSUMER_ADDRESS)
        .to(DEX_ADDRESS)
        .typed(green_dex_proxy::GreenDexProxy)
        .buy()
        .egld(30u64)
        .run();

    world
        .tx()
        .from(CONSUMER_ADDRESS)
        .to(TOKEN_ADDRESS)
        .typed(green_token_proxy::GreenTokenProxy)
        .approve(DEX_ADDRESS, 10u64)
        .run();

    world
        .tx()
        .from(CONSUMER_ADDRESS)
        .to(DEX_ADDRESS)
        .typed(green_dex_proxy::GreenDexProxy)
        .sell(10u64)
        .run();

    assert_eq!(
        balance_of(&mut world, CONSUMER_ADDRESS),
        RustBigUint::from(20u64)
    );
    world.check_account(CONSUMER_ADDRESS).balance(CONSUMER_EGLD - 20);
    world.check_account(DEX_ADDRESS).balance(20u64);

    let supply = world
        .query()
        .to(TOKEN_ADDRESS)
        .typed(green_token_proxy::GreenTokenProxy)
        .total_supply()
        .returns(ReturnsResultUnmanaged)
        .run();
    assert_eq!(supply, RustBigUint::from(20u64));
}

#[test]
fn buy_then_sell_round_trip_restores_balances() {
    let mut world = setup();

    world
        .tx()
        .from(CONSUMER_ADDRESS)
        .to(DEX_ADDRESS)
        .typed(green_dex_proxy::GreenDexProxy)
        .buy()
        .egld(30u64)
        .run();

    world
        .tx()
        .from(CONSUMER_ADDRESS)
        .to(TOKEN_ADDRESS)
        .typed(green_token_proxy::GreenTokenProxy)
        .approve(DEX_ADDRESS, 30u64)
        .run();

    world
        .tx()
        .from(CONSUMER_ADDRESS)
        .to(DEX_ADDRESS)
        .typed(green_dex_proxy::GreenDexProxy)
        .sell(30u64)
        .run();

    assert_eq!(
        balance_of(&mut world, CONSUMER_ADDRESS),
        RustBigUint::from(0u64)
    );
    world.check_account(CONSUMER_ADDRESS).balance(CONSUMER_EGLD);
    world.check_account(DEX_ADDRESS).balance(0u64);
}

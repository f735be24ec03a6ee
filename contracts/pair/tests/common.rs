#![allow(dead_code)]

use looter_pair::{LooterPair, LooterPairClient};
use soroban_sdk::{testutils::Address as _, token, Address, Env};

pub const E18: i128 = 1_000_000_000_000_000_000;

pub struct PairSetup<'a> {
    pub client: LooterPairClient<'a>,
    pub factory: Address,
    pub token_0: Address,
    pub token_1: Address,
    pub lp: Address,
}

/// Register and initialize a pair over two fresh tokens, funding `lp`
pub fn setup_pair(env: &Env) -> PairSetup<'_> {
    let admin = Address::generate(env);
    let factory = Address::generate(env);
    let token_a = create_token(env, &admin);
    let token_b = create_token(env, &admin);

    let pair_id = env.register(LooterPair, ());
    let client = LooterPairClient::new(env, &pair_id);
    client.initialize(&factory, &token_a, &token_b);

    let (token_0, token_1) = client.get_tokens();
    let lp = Address::generate(env);
    mint_tokens(env, &token_0, &lp, 10_000 * E18);
    mint_tokens(env, &token_1, &lp, 10_000 * E18);

    PairSetup { client, factory, token_0, token_1, lp }
}

/// Deposit both tokens from `lp` and mint shares back to it
pub fn add_liquidity(env: &Env, setup: &PairSetup, amount_0: i128, amount_1: i128) -> i128 {
    token::Client::new(env, &setup.token_0).transfer(&setup.lp, &setup.client.address, &amount_0);
    token::Client::new(env, &setup.token_1).transfer(&setup.lp, &setup.client.address, &amount_1);
    setup.client.mint(&setup.lp)
}

/// Create a test token
pub fn create_token(env: &Env, admin: &Address) -> Address {
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Mint tokens to an address
pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    use soroban_sdk::token::StellarAssetClient;
    let client = StellarAssetClient::new(env, token);
    client.mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, id: &Address) -> i128 {
    token::Client::new(env, token).balance(id)
}

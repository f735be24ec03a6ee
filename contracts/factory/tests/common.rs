#![allow(dead_code)]

use looter_factory::{LooterFactory, LooterFactoryClient};
use looter_pair::{LooterPair, LooterPairClient};
use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};

pub fn setup_factory(env: &Env) -> (LooterFactoryClient<'_>, Address) {
    let admin = Address::generate(env);
    let factory_id = env.register(LooterFactory, ());
    let client = LooterFactoryClient::new(env, &factory_id);
    let pair_wasm_hash = BytesN::from_array(env, &[0u8; 32]);
    client.initialize(&admin, &pair_wasm_hash);
    (client, admin)
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}

/// Deploy a pair natively and initialize it against `factory`
pub fn deploy_pair(env: &Env, factory: &Address, token_a: &Address, token_b: &Address) -> Address {
    let pair_id = env.register(LooterPair, ());
    LooterPairClient::new(env, &pair_id).initialize(factory, token_a, token_b);
    pair_id
}

#![allow(dead_code)]

use looter_quests::{LooterQuests, LooterQuestsClient};
use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

pub struct VaultSetup<'a> {
    pub client: LooterQuestsClient<'a>,
    pub admin: Address,
    pub reward: Address,
    pub alice: Address,
    pub bob: Address,
    pub carol: Address,
}

/// Vault over a fresh reward token, with 100 tokens each for alice, bob and carol
pub fn setup_vault(env: &Env) -> VaultSetup<'_> {
    let admin = Address::generate(env);
    let reward = env.register_stellar_asset_contract_v2(admin.clone()).address();

    let vault_id = env.register(LooterQuests, ());
    let client = LooterQuestsClient::new(env, &vault_id);
    client.initialize(
        &admin,
        &reward,
        &String::from_str(env, "Quests"),
        &String::from_str(env, "xLOOT"),
    );

    let alice = Address::generate(env);
    let bob = Address::generate(env);
    let carol = Address::generate(env);
    let minter = token::StellarAssetClient::new(env, &reward);
    for holder in [&alice, &bob, &carol] {
        minter.mint(holder, &100);
    }

    VaultSetup { client, admin, reward, alice, bob, carol }
}

pub fn balance(env: &Env, token: &Address, id: &Address) -> i128 {
    token::Client::new(env, token).balance(id)
}

mod common;

use common::balance;
use looter_quests::{LooterQuests, LooterQuestsClient, QuestsError};
use soroban_sdk::{testutils::Address as _, token, Address, Env, String};

#[test]
fn test_metadata() {
    let env = Env::default();
    env.mock_all_auths();
    let vault = common::setup_vault(&env);

    assert_eq!(vault.client.name(), String::from_str(&env, "Quests"));
    assert_eq!(vault.client.symbol(), String::from_str(&env, "xLOOT"));
    assert_eq!(vault.client.decimals(), 7);
    assert_eq!(vault.client.reward_token(), vault.reward);
    assert_eq!(vault.client.admin(), vault.admin);
}

#[test]
fn test_initialize_twice() {
    let env = Env::default();
    env.mock_all_auths();
    let vault = common::setup_vault(&env);

    let result = vault.client.try_initialize(
        &vault.admin,
        &vault.reward,
        &String::from_str(&env, "Chest"),
        &String::from_str(&env, "xCHEST"),
    );
    assert_eq!(result, Err(Ok(QuestsError::AlreadyInitialized)));
}

#[test]
#[should_panic]
fn test_initialize_requires_admin_auth() {
    let env = Env::default();
    let admin = Address::generate(&env);
    let reward = env.register_stellar_asset_contract_v2(admin.clone()).address();
    let vault = LooterQuestsClient::new(&env, &env.register(LooterQuests, ()));

    vault.initialize(
        &admin,
        &reward,
        &String::from_str(&env, "Quests"),
        &String::from_str(&env, "xLOOT"),
    );
}

#[test]
fn test_first_enter_mints_one_to_one() {
    let env = Env::default();
    env.mock_all_auths();
    let vault = common::setup_vault(&env);

    assert_eq!(vault.client.enter(&vault.alice, &20), 20);
    assert_eq!(vault.client.balance(&vault.alice), 20);
    assert_eq!(vault.client.total_supply(), 20);
    assert_eq!(balance(&env, &vault.reward, &vault.client.address), 20);
}

#[test]
fn test_share_value_tracks_deposits_to_vault() {
    let env = Env::default();
    env.mock_all_auths();
    let vault = common::setup_vault(&env);
    let vault_addr = vault.client.address.clone();

    vault.client.enter(&vault.alice, &20);
    vault.client.enter(&vault.bob, &10);
    assert_eq!(balance(&env, &vault.reward, &vault_addr), 30);

    // Rewards arrive without minting shares
    token::Client::new(&env, &vault.reward).transfer(&vault.carol, &vault_addr, &20);

    // 10 * 30 / 50
    assert_eq!(vault.client.enter(&vault.alice, &10), 6);
    assert_eq!(vault.client.balance(&vault.alice), 26);
    assert_eq!(vault.client.total_supply(), 36);

    // 5 * 60 / 36, rounded down
    assert_eq!(vault.client.leave(&vault.bob, &5), 8);
    assert_eq!(vault.client.balance(&vault.bob), 5);
    assert_eq!(balance(&env, &vault.reward, &vault_addr), 52);
    assert_eq!(balance(&env, &vault.reward, &vault.bob), 98);
    assert_eq!(balance(&env, &vault.reward, &vault.alice), 70);
}

#[test]
fn test_leave_more_than_balance() {
    let env = Env::default();
    env.mock_all_auths();
    let vault = common::setup_vault(&env);

    vault.client.enter(&vault.alice, &20);

    let result = vault.client.try_leave(&vault.alice, &21);
    assert_eq!(result, Err(Ok(QuestsError::InsufficientShares)));
    assert_eq!(vault.client.balance(&vault.alice), 20);
}

#[test]
fn test_leave_everything() {
    let env = Env::default();
    env.mock_all_auths();
    let vault = common::setup_vault(&env);

    vault.client.enter(&vault.alice, &40);
    assert_eq!(vault.client.leave(&vault.alice, &40), 40);
    assert_eq!(vault.client.total_supply(), 0);
    assert_eq!(balance(&env, &vault.reward, &vault.alice), 100);
}

#[test]
fn test_invalid_amounts() {
    let env = Env::default();
    env.mock_all_auths();
    let vault = common::setup_vault(&env);

    assert_eq!(
        vault.client.try_enter(&vault.alice, &0),
        Err(Ok(QuestsError::InvalidAmount))
    );
    assert_eq!(
        vault.client.try_leave(&vault.alice, &-1),
        Err(Ok(QuestsError::InvalidAmount))
    );
}

#[test]
fn test_transfer_shares() {
    let env = Env::default();
    env.mock_all_auths();
    let vault = common::setup_vault(&env);

    vault.client.enter(&vault.alice, &20);
    vault.client.transfer(&vault.alice, &vault.bob, &5);

    assert_eq!(vault.client.balance(&vault.alice), 15);
    assert_eq!(vault.client.balance(&vault.bob), 5);
    assert_eq!(vault.client.total_supply(), 20);

    let result = vault.client.try_transfer(&vault.bob, &vault.carol, &6);
    assert_eq!(result, Err(Ok(QuestsError::InsufficientShares)));
}

#[test]
#[should_panic]
fn test_enter_requires_auth() {
    let env = Env::default();
    env.mock_all_auths();
    let vault = common::setup_vault(&env);

    env.mock_auths(&[]);
    vault.client.enter(&vault.alice, &20);
}

#![allow(dead_code)]

use auto_looter::{AutoLooter, AutoLooterClient, LooterError};
use looter_factory::{LooterFactory, LooterFactoryClient};
use looter_pair::{LooterPair, LooterPairClient};
use looter_quests::{LooterQuests, LooterQuestsClient};
use soroban_sdk::{
    contract, contractimpl, testutils::Address as _, token, Address, BytesN, Env, String,
};

pub const E18: i128 = 1_000_000_000_000_000_000;

/// Pool depth used for every pair, per side
pub const POOL_DEPTH: i128 = 1000 * E18;
/// Shares handed to the looter before a conversion
pub const FEE_SHARES: i128 = 100 * E18;

// Account (not contract) addresses, required for guarded callers
pub const OWNER_KEY: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
pub const CALLER_KEY: &str = "GAAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQDZ7H";
pub const OPERATOR_KEY: &str = "GABAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEAQCAIBAEJXA";
pub const STRANGER_KEY: &str = "GABQGAYDAMBQGAYDAMBQGAYDAMBQGAYDAMBQGAYDAMBQGAYDAMBQHGPC";

pub fn account(env: &Env, key: &str) -> Address {
    Address::from_string(&String::from_str(env, key))
}

pub struct Fixture<'a> {
    pub looter: AutoLooterClient<'a>,
    pub factory: LooterFactoryClient<'a>,
    pub quest: LooterQuestsClient<'a>,
    pub owner: Address,
    pub caller: Address,
    pub lp: Address,
    pub loot: Address,
    pub weth: Address,
    pub busd: Address,
    pub dai: Address,
    pub link: Address,
    pub usdc: Address,
}

/// Tokens, factory, vault and an initialized looter. No pairs yet.
pub fn setup(env: &Env) -> Fixture<'_> {
    env.mock_all_auths();

    let token_admin = Address::generate(env);
    let loot = create_token(env, &token_admin);
    let weth = create_token(env, &token_admin);
    let busd = create_token(env, &token_admin);
    let dai = create_token(env, &token_admin);
    let link = create_token(env, &token_admin);
    let usdc = create_token(env, &token_admin);

    let factory = LooterFactoryClient::new(env, &env.register(LooterFactory, ()));
    factory.initialize(&Address::generate(env), &BytesN::from_array(env, &[0u8; 32]));

    let quest = LooterQuestsClient::new(env, &env.register(LooterQuests, ()));
    quest.initialize(
        &token_admin,
        &loot,
        &String::from_str(env, "Quests"),
        &String::from_str(env, "xLOOT"),
    );

    let owner = account(env, OWNER_KEY);
    let looter = AutoLooterClient::new(env, &env.register(AutoLooter, ()));
    looter.initialize(&owner, &factory.address, &quest.address, &loot, &weth);

    let lp = Address::generate(env);
    for token in [&loot, &weth, &busd, &dai, &link, &usdc] {
        token::StellarAssetClient::new(env, token).mint(&lp, &(100_000 * E18));
    }

    Fixture {
        looter,
        factory,
        quest,
        owner,
        caller: account(env, CALLER_KEY),
        lp,
        loot,
        weth,
        busd,
        dai,
        link,
        usdc,
    }
}

/// Fixture with every pool of the reference deployment
pub fn setup_with_pools(env: &Env) -> Fixture<'_> {
    let fx = setup(env);
    fx.add_pair(&fx.loot, &fx.weth);
    fx.add_pair(&fx.loot, &fx.busd);
    fx.add_pair(&fx.loot, &fx.dai);
    fx.add_pair(&fx.busd, &fx.weth);
    fx.add_pair(&fx.busd, &fx.dai);
    fx.add_pair(&fx.busd, &fx.link);
    fx.add_pair(&fx.dai, &fx.weth);
    fx.add_pair(&fx.dai, &fx.link);
    fx.add_pair(&fx.link, &fx.weth);
    fx
}

impl Fixture<'_> {
    fn env(&self) -> &Env {
        &self.looter.env
    }

    /// Deploy a pair, register it with the factory and seed it from `lp`
    pub fn add_pair(&self, token_x: &Address, token_y: &Address) -> Address {
        self.add_pair_with(token_x, token_y, POOL_DEPTH, POOL_DEPTH)
    }

    pub fn add_pair_with(
        &self,
        token_x: &Address,
        token_y: &Address,
        amount_x: i128,
        amount_y: i128,
    ) -> Address {
        let pair = self.add_empty_pair(token_x, token_y);
        let env = self.env();
        token::Client::new(env, token_x).transfer(&self.lp, &pair, &amount_x);
        token::Client::new(env, token_y).transfer(&self.lp, &pair, &amount_y);
        LooterPairClient::new(env, &pair).mint(&self.lp);
        pair
    }

    /// Registered pair that never received liquidity
    pub fn add_empty_pair(&self, token_x: &Address, token_y: &Address) -> Address {
        let env = self.env();
        let pair = LooterPairClient::new(env, &env.register(LooterPair, ()));
        pair.initialize(&self.factory.address, token_x, token_y);
        self.factory.register_pair(&pair.address);
        pair.address
    }

    pub fn pair(&self, token_x: &Address, token_y: &Address) -> LooterPairClient<'_> {
        let address = self.factory.get_pair(token_x, token_y).unwrap();
        LooterPairClient::new(self.env(), &address)
    }

    /// Move `amount` pool shares from `lp` to the looter, as fee minting would
    pub fn give_shares(&self, token_x: &Address, token_y: &Address, amount: i128) {
        self.pair(token_x, token_y)
            .transfer(&self.lp, &self.looter.address, &amount);
    }

    pub fn looter_shares(&self, token_x: &Address, token_y: &Address) -> i128 {
        self.pair(token_x, token_y).balance(&self.looter.address)
    }

    pub fn vault_rewards(&self) -> i128 {
        balance(self.env(), &self.loot, &self.quest.address)
    }

    /// Nothing of the position or its tokens is left on the looter
    pub fn assert_looter_drained(&self, token_x: &Address, token_y: &Address) {
        let env = self.env();
        let looter = &self.looter.address;
        assert_eq!(self.looter_shares(token_x, token_y), 0);
        assert_eq!(balance(env, token_x, looter), 0);
        assert_eq!(balance(env, token_y, looter), 0);
        assert_eq!(balance(env, &self.loot, looter), 0);
    }
}

pub fn create_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone()).address()
}

pub fn balance(env: &Env, token: &Address, id: &Address) -> i128 {
    token::Client::new(env, token).balance(id)
}

// ============================================================
// CONTRACT CALLER
// ============================================================

mod convert_proxy {
    use super::*;

    /// Contract that tries to drive a conversion on its own behalf
    #[contract]
    pub struct ConvertProxy;

    #[contractimpl]
    impl ConvertProxy {
        pub fn convert(
            env: Env,
            looter: Address,
            token_a: Address,
            token_b: Address,
        ) -> Result<i128, LooterError> {
            let client = AutoLooterClient::new(&env, &looter);
            match client.try_convert(&env.current_contract_address(), &token_a, &token_b) {
                Ok(Ok(reward)) => Ok(reward),
                Err(Ok(err)) => Err(err),
                _ => panic!("conversion aborted"),
            }
        }
    }

    pub fn deploy_proxy(env: &Env) -> ConvertProxyClient<'_> {
        ConvertProxyClient::new(env, &env.register(ConvertProxy, ()))
    }
}
pub use convert_proxy::*;

mod convert_relay {
    use super::*;

    /// Contract that forwards a conversion on behalf of an account
    #[contract]
    pub struct ConvertRelay;

    #[contractimpl]
    impl ConvertRelay {
        pub fn convert(
            env: Env,
            looter: Address,
            caller: Address,
            token_a: Address,
            token_b: Address,
        ) -> i128 {
            AutoLooterClient::new(&env, &looter).convert(&caller, &token_a, &token_b)
        }
    }

    pub fn deploy_relay(env: &Env) -> ConvertRelayClient<'_> {
        ConvertRelayClient::new(env, &env.register(ConvertRelay, ()))
    }
}
pub use convert_relay::*;

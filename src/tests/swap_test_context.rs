extern crate std;
use crate::{
    pricing::{calc_in_given_out, calc_out_given_in, BONE},
    tests::mock_native_wrapper_contract::{
        MockNativeWrapperContract, MockNativeWrapperContractClient,
    },
    tests::mock_weighted_pool_contract::{
        MockWeightedPoolContract, MockWeightedPoolContractClient,
    },
    ExchangeProxy, ExchangeProxyClient, HopSwap, RouterError, Swap,
};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, Env, Error, InvokeError, Vec,
};

pub const MAX: i128 = i128::MAX;
pub const SWAP_FEE: i128 = 3 * BONE / 1000;
pub const DEADLINE: u64 = 1_000;
pub const TRADER_FUNDS: i128 = 10_000 * BONE;

pub struct SwapTestContext<'a> {
    pub env: Env,
    pub admin: Address,
    pub native: Address,
    pub weth: Address,
    pub dai: Address,
    pub mkr: Address,
    pub wrapper: Address,
    pub wrapper_client: MockNativeWrapperContractClient<'a>,
    pub router: Address,
    pub router_client: ExchangeProxyClient<'a>,
    pub trader: Address,
}

impl SwapTestContext<'_> {
    // Register a weighted pool holding the given (token, balance, weight) reserves
    pub fn create_pool<const N: usize>(&self, reserves: [(&Address, i128, i128); N]) -> Address {
        let pool = self.env.register(MockWeightedPoolContract, ());
        let mut tokens: Vec<Address> = Vec::new(&self.env);
        let mut balances: Vec<i128> = Vec::new(&self.env);
        let mut weights: Vec<i128> = Vec::new(&self.env);
        for (token, balance, weight) in reserves {
            tokens.push_back(token.clone());
            balances.push_back(balance);
            weights.push_back(weight);
            self.mint(token, &pool, balance);
        }
        MockWeightedPoolContractClient::new(&self.env, &pool).init(
            &tokens,
            &balances,
            &weights,
            &SWAP_FEE,
        );
        pool
    }

    // Mint tokens; wrapped tokens get native coin backing on the wrapper
    pub fn mint(&self, token: &Address, to: &Address, amount: i128) {
        StellarAssetClient::new(&self.env, token).mint(to, &amount);
        if token == &self.weth {
            StellarAssetClient::new(&self.env, &self.native).mint(&self.wrapper, &amount);
        }
    }

    pub fn fund_trader(&self, token: &Address, amount: i128) {
        self.mint(token, &self.trader, amount);
        self.approve(token, amount);
    }

    pub fn approve(&self, token: &Address, amount: i128) {
        self.token(token)
            .approve(&self.trader, &self.router, &amount, &(self.env.ledger().sequence() + 100));
    }

    pub fn token(&self, token: &Address) -> TokenClient<'_> {
        TokenClient::new(&self.env, token)
    }

    pub fn balance(&self, token: &Address, owner: &Address) -> i128 {
        self.token(token).balance(owner)
    }

    pub fn check_trader_balance(&self, token: &Address, expected: i128) {
        assert_eq!(self.balance(token, &self.trader), expected);
    }

    pub fn check_no_router_leftovers(&self) {
        for token in [&self.native, &self.weth, &self.dai, &self.mkr] {
            assert_eq!(self.balance(token, &self.router), 0);
        }
    }

    // Output the pool would pay right now for an exact input
    pub fn quote_out(
        &self,
        pool: &Address,
        token_in: &Address,
        token_out: &Address,
        amount_in: i128,
    ) -> i128 {
        let client = MockWeightedPoolContractClient::new(&self.env, pool);
        calc_out_given_in(
            &self.env,
            client.get_balance(token_in),
            client.get_denormalized_weight(token_in),
            client.get_balance(token_out),
            client.get_denormalized_weight(token_out),
            amount_in,
            client.get_swap_fee(),
        )
    }

    // Input the pool would take right now for an exact output
    pub fn quote_in(
        &self,
        pool: &Address,
        token_in: &Address,
        token_out: &Address,
        amount_out: i128,
    ) -> i128 {
        let client = MockWeightedPoolContractClient::new(&self.env, pool);
        calc_in_given_out(
            &self.env,
            client.get_balance(token_in),
            client.get_denormalized_weight(token_in),
            client.get_balance(token_out),
            client.get_denormalized_weight(token_out),
            amount_out,
            client.get_swap_fee(),
        )
    }

    pub fn swap(&self, pool: &Address, amount: i128, limit: i128) -> Swap {
        Swap {
            pool: pool.clone(),
            amount,
            limit,
            max_price: MAX,
        }
    }

    pub fn hop(
        &self,
        pool: &Address,
        token_in: &Address,
        token_out: &Address,
        amount: i128,
        limit: i128,
    ) -> HopSwap {
        HopSwap {
            pool: pool.clone(),
            token_in: token_in.clone(),
            token_out: token_out.clone(),
            amount,
            limit,
            max_price: MAX,
        }
    }

    pub fn swaps<const N: usize>(&self, swaps: [Swap; N]) -> Vec<Swap> {
        Vec::from_array(&self.env, swaps)
    }

    pub fn sequence<const N: usize>(&self, hops: [HopSwap; N]) -> Vec<HopSwap> {
        Vec::from_array(&self.env, hops)
    }

    pub fn sequences<const N: usize>(&self, sequences: [Vec<HopSwap>; N]) -> Vec<Vec<HopSwap>> {
        Vec::from_array(&self.env, sequences)
    }

    // Move the ledger clock forward
    pub fn jump(&self, time: u64) {
        self.env
            .ledger()
            .with_mut(|li| li.timestamp = li.timestamp.saturating_add(time));
    }
}

pub fn setup() -> SwapTestContext<'static> {
    let env = Env::default();
    env.mock_all_auths();

    let issuer = Address::generate(&env);
    let native = fake_asset(&env, &issuer);
    let weth = fake_asset(&env, &issuer);
    let dai = fake_asset(&env, &issuer);
    let mkr = fake_asset(&env, &issuer);

    //init wrapper, it issues the wrapped token
    let wrapper = env.register(MockNativeWrapperContract, ());
    let wrapper_client = MockNativeWrapperContractClient::new(&env, &wrapper);
    wrapper_client.init(&native, &weth);
    StellarAssetClient::new(&env, &weth).set_admin(&wrapper);

    //init router
    let admin = Address::generate(&env);
    let router = env.register(ExchangeProxy, ());
    let router_client = ExchangeProxyClient::new(&env, &router);
    router_client.init(&admin, &native, &wrapper);

    //init client address
    let trader = Address::generate(&env);

    SwapTestContext {
        env,
        admin,
        native,
        weth,
        dai,
        mkr,
        wrapper,
        wrapper_client,
        router,
        router_client,
        trader,
    }
}

pub fn fake_asset(env: &Env, issuer: &Address) -> Address {
    env.register_stellar_asset_contract_v2(issuer.clone())
        .address()
}

pub fn amount(amount: i128) -> i128 {
    amount * BONE
}

// Expected failure of a router invocation
pub fn router_error(err: RouterError) -> Result<Error, InvokeError> {
    Ok(err.into())
}

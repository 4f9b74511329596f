use soroban_sdk::{contractclient, Address, Env};

use super::adapter::PoolAdapter;
use crate::{allowance, types::swapinfo::PoolSwap};

#[contractclient(name = "WeightedPoolClient")]
#[allow(dead_code)]
pub trait WeightedPoolTrait {
    fn get_swap_fee(e: Env) -> i128;

    fn get_balance(e: Env, token: Address) -> i128;

    fn get_denormalized_weight(e: Env, token: Address) -> i128;

    fn swap_exact_amount_in(
        e: Env,
        token_in: Address,
        token_amount_in: i128,
        token_out: Address,
        min_amount_out: i128,
        max_price: i128,
        user: Address,
    ) -> (i128, i128);

    fn swap_exact_amount_out(
        e: Env,
        token_in: Address,
        max_amount_in: i128,
        token_out: Address,
        token_amount_out: i128,
        max_price: i128,
        user: Address,
    ) -> (i128, i128);
}

pub struct WeightedPoolAdapter<'a> {
    env: &'a Env,
    pool: Address,
    client: WeightedPoolClient<'a>,
}

impl<'a> WeightedPoolAdapter<'a> {
    pub fn new(env: &'a Env, pool: &Address) -> Self {
        WeightedPoolAdapter {
            env,
            pool: pool.clone(),
            client: WeightedPoolClient::new(env, pool),
        }
    }
}

impl PoolAdapter for WeightedPoolAdapter<'_> {
    fn env(&self) -> &Env {
        self.env
    }

    fn address(&self) -> &Address {
        &self.pool
    }

    fn quote_fee(&self) -> i128 {
        self.client.get_swap_fee()
    }

    fn balance(&self, token: &Address) -> i128 {
        self.client.get_balance(token)
    }

    fn weight(&self, token: &Address) -> i128 {
        self.client.get_denormalized_weight(token)
    }

    fn swap_exact_amount_in(
        &self,
        token_in: &Address,
        amount_in: i128,
        token_out: &Address,
        min_amount_out: i128,
        max_price: i128,
    ) -> PoolSwap {
        allowance::grant(self.env, token_in, &self.pool, amount_in);
        let (amount_out, spot_price_after) = self.client.swap_exact_amount_in(
            token_in,
            &amount_in,
            token_out,
            &min_amount_out,
            &max_price,
            &self.env.current_contract_address(),
        );
        allowance::revoke(self.env, token_in, &self.pool);
        PoolSwap {
            amount_in,
            amount_out,
            spot_price_after,
        }
    }

    fn swap_exact_amount_out(
        &self,
        token_in: &Address,
        max_amount_in: i128,
        token_out: &Address,
        amount_out: i128,
        max_price: i128,
    ) -> PoolSwap {
        allowance::grant(self.env, token_in, &self.pool, max_amount_in);
        let (amount_in, spot_price_after) = self.client.swap_exact_amount_out(
            token_in,
            &max_amount_in,
            token_out,
            &amount_out,
            &max_price,
            &self.env.current_contract_address(),
        );
        allowance::revoke(self.env, token_in, &self.pool);
        PoolSwap {
            amount_in,
            amount_out,
            spot_price_after,
        }
    }
}

use super::weighted_pool::WeightedPoolAdapter;
use crate::{pricing, types::swapinfo::PoolSwap};
use soroban_sdk::{Address, Env};

// Standard interface for all LP adapters
pub trait PoolAdapter {
    fn env(&self) -> &Env;

    fn address(&self) -> &Address;

    // Current swap fee fraction
    fn quote_fee(&self) -> i128;

    // Pool reserve of the token
    fn balance(&self, token: &Address) -> i128;

    // Denormalized weight of the token
    fn weight(&self, token: &Address) -> i128;

    // Sell an exact amount; the pool rejects if the output is below `min_amount_out`
    fn swap_exact_amount_in(
        &self,
        token_in: &Address,
        amount_in: i128,
        token_out: &Address,
        min_amount_out: i128,
        max_price: i128,
    ) -> PoolSwap;

    // Buy an exact amount; the pool rejects if the input is above `max_amount_in`
    fn swap_exact_amount_out(
        &self,
        token_in: &Address,
        max_amount_in: i128,
        token_out: &Address,
        amount_out: i128,
        max_price: i128,
    ) -> PoolSwap;

    // Input the pool needs right now to pay out `amount_out`
    fn quote_in_given_out(&self, token_in: &Address, token_out: &Address, amount_out: i128) -> i128 {
        pricing::calc_in_given_out(
            self.env(),
            self.balance(token_in),
            self.weight(token_in),
            self.balance(token_out),
            self.weight(token_out),
            amount_out,
            self.quote_fee(),
        )
    }
}

// Resolve LP adapter for a given pool
pub fn pool_adapter<'a>(e: &'a Env, pool: &Address) -> WeightedPoolAdapter<'a> {
    WeightedPoolAdapter::new(e, pool)
}

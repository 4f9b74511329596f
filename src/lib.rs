#![no_std]

mod adapters;
mod allowance;
mod events;
mod extensions;
mod pricing;
mod router;
mod settlement;
#[cfg(test)]
mod tests;
mod types;

use adapters::native::NativeWrapperClient;
use events::{Events, RouterEvents};
use extensions::env_extensions::{EnvExtensions, ReentrancyLock};
use router::{batch, multihop, SwapKind};
use settlement::Settlement;
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, BytesN, Env, Vec};
pub use types::{error::RouterError, hop::HopSwap, native::NativeConfig, swap::Swap};

#[contract]
pub struct ExchangeProxy;

#[contractimpl]
impl ExchangeProxy {
    // Initialize contract
    //
    // # Arguments
    //
    // * `admin` - Admin account address
    // * `native` - Native coin token contract, accepted as a request endpoint
    // * `wrapper` - Contract wrapping native coin into the token traded by pools
    //
    // # Panics
    //
    // Panics if the contract is already initialized
    pub fn init(e: Env, admin: Address, native: Address, wrapper: Address) {
        if e.is_initialized() {
            e.panic_with_error(RouterError::AlreadyInitialized);
        }
        admin.require_auth();
        let wrapped = NativeWrapperClient::new(&e, &wrapper).token();
        if wrapped == native {
            e.panic_with_error(RouterError::InvalidPath);
        }
        e.set_admin(&admin);
        e.set_native_config(&NativeConfig {
            native,
            wrapper,
            wrapped,
        });
        e.bump_instance();
    }

    // Update the contract's WASM hash
    //
    // # Arguments
    //
    // * `wasm_hash` - New WASM hash
    //
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if the caller is not the admin
    pub fn update_contract(e: Env, wasm_hash: BytesN<32>) {
        if !e.is_initialized() {
            e.panic_with_error(RouterError::NotInitialized);
        }
        e.panic_if_not_admin();
        e.deployer().update_current_contract_wasm(wasm_hash)
    }

    // Retrieve native coin settings
    pub fn native_config(e: Env) -> NativeConfig {
        e.get_native_config()
    }

    // Sell a fixed total of token_in across several pools of the same pair
    //
    // # Arguments
    //
    // * `trader` - Address of the trader account
    // * `swaps` - Steps executed in order; `amount` is sold, `limit` is the min bought
    // * `token_in` - Selling token address (native coin address for native input)
    // * `token_out` - Buying token address (native coin address for native output)
    // * `total_amount_in` - Amount pulled from the trader, surplus over the step sum is returned
    // * `min_total_amount_out` - Min total amount to receive
    // * `deadline` - Latest ledger timestamp the request may execute at
    //
    // # Panics
    //
    // Panics if the deadline has passed
    // Panics if the request is malformed or the trader cannot fund it
    // Panics if any step or the total violates its bound
    //
    // # Returns
    //
    // * Total bought amount
    pub fn batch_swap_exact_in(
        e: Env,
        trader: Address,
        swaps: Vec<Swap>,
        token_in: Address,
        token_out: Address,
        total_amount_in: i128,
        min_total_amount_out: i128,
        deadline: u64,
    ) -> i128 {
        trader.require_auth();
        let _lock = ReentrancyLock::acquire(&e);
        e.panic_if_expired(deadline);
        e.bump_instance();
        check_totals(&e, total_amount_in, min_total_amount_out);

        let settlement = Settlement::open(&e, &trader, &token_in, &token_out);
        let implied_in = batch::implied_total(&e, &swaps);
        check_funding(&e, &settlement, implied_in, total_amount_in);
        settlement.collect(total_amount_in);

        let total_out = batch::swap_exact_in(
            &e,
            &swaps,
            settlement.pool_token_in(),
            settlement.pool_token_out(),
        );
        if total_out < min_total_amount_out {
            panic_with_error!(&e, RouterError::SlippageExceeded);
        }

        settlement.pay_out(total_out);
        settlement.refund(total_amount_in - implied_in);
        Events::new(&e).batch_swap(trader, token_in, token_out, implied_in, total_out);
        total_out
    }

    // Buy a fixed amount of token_out from each of several pools of the same pair
    //
    // # Arguments
    //
    // * `trader` - Address of the trader account
    // * `swaps` - Steps executed in order; `amount` is bought, `limit` is the max sold
    // * `token_in` - Selling token address (native coin address for native input)
    // * `token_out` - Buying token address (native coin address for native output)
    // * `max_total_amount_in` - Amount pulled from the trader, unspent part is returned
    // * `deadline` - Latest ledger timestamp the request may execute at
    //
    // # Returns
    //
    // * Total sold amount
    pub fn batch_swap_exact_out(
        e: Env,
        trader: Address,
        swaps: Vec<Swap>,
        token_in: Address,
        token_out: Address,
        max_total_amount_in: i128,
        deadline: u64,
    ) -> i128 {
        trader.require_auth();
        let _lock = ReentrancyLock::acquire(&e);
        e.panic_if_expired(deadline);
        e.bump_instance();
        check_totals(&e, max_total_amount_in, 0);

        let settlement = Settlement::open(&e, &trader, &token_in, &token_out);
        let total_out = batch::implied_total(&e, &swaps);
        settlement.collect(max_total_amount_in);

        let total_in = batch::swap_exact_out(
            &e,
            &swaps,
            settlement.pool_token_in(),
            settlement.pool_token_out(),
            max_total_amount_in,
        );
        if total_in > max_total_amount_in {
            panic_with_error!(&e, RouterError::SlippageExceeded);
        }

        settlement.pay_out(total_out);
        settlement.refund(max_total_amount_in - total_in);
        Events::new(&e).batch_swap(trader, token_in, token_out, total_in, total_out);
        total_in
    }

    // Sell a fixed total of token_in along several swap sequences
    //
    // # Arguments
    //
    // * `trader` - Address of the trader account
    // * `sequences` - Hop chains from token_in to token_out; the first hop `amount`
    //   is sold, later hops sell the previous hop output
    // * `token_in` - Selling token address (native coin address for native input)
    // * `token_out` - Buying token address (native coin address for native output)
    // * `total_amount_in` - Amount pulled from the trader, surplus over the first hop sum is returned
    // * `min_total_amount_out` - Min total amount to receive
    // * `deadline` - Latest ledger timestamp the request may execute at
    //
    // # Returns
    //
    // * Total bought amount
    pub fn multihop_batch_swap_exact_in(
        e: Env,
        trader: Address,
        sequences: Vec<Vec<HopSwap>>,
        token_in: Address,
        token_out: Address,
        total_amount_in: i128,
        min_total_amount_out: i128,
        deadline: u64,
    ) -> i128 {
        trader.require_auth();
        let _lock = ReentrancyLock::acquire(&e);
        e.panic_if_expired(deadline);
        e.bump_instance();
        check_totals(&e, total_amount_in, min_total_amount_out);

        let settlement = Settlement::open(&e, &trader, &token_in, &token_out);
        let implied_in = multihop::implied_total(
            &e,
            &sequences,
            settlement.pool_token_in(),
            settlement.pool_token_out(),
            SwapKind::ExactIn,
        );
        check_funding(&e, &settlement, implied_in, total_amount_in);
        settlement.collect(total_amount_in);

        let mut total_out: i128 = 0;
        for sequence in sequences.iter() {
            let bought = multihop::swap_exact_in(&e, &sequence);
            total_out = router::checked_sum(&e, total_out, bought);
        }
        if total_out < min_total_amount_out {
            panic_with_error!(&e, RouterError::SlippageExceeded);
        }

        settlement.pay_out(total_out);
        settlement.refund(total_amount_in - implied_in);
        Events::new(&e).batch_swap(trader, token_in, token_out, implied_in, total_out);
        total_out
    }

    // Buy a fixed amount of token_out along several swap sequences
    //
    // # Arguments
    //
    // * `trader` - Address of the trader account
    // * `sequences` - Hop chains from token_in to token_out in forward order; the
    //   last hop `amount` is bought, earlier hops buy what the next pool needs
    // * `token_in` - Selling token address (native coin address for native input)
    // * `token_out` - Buying token address (native coin address for native output)
    // * `max_total_amount_in` - Amount pulled from the trader, unspent part is returned
    // * `deadline` - Latest ledger timestamp the request may execute at
    //
    // # Returns
    //
    // * Total sold amount
    pub fn multihop_batch_swap_exact_out(
        e: Env,
        trader: Address,
        sequences: Vec<Vec<HopSwap>>,
        token_in: Address,
        token_out: Address,
        max_total_amount_in: i128,
        deadline: u64,
    ) -> i128 {
        trader.require_auth();
        let _lock = ReentrancyLock::acquire(&e);
        e.panic_if_expired(deadline);
        e.bump_instance();
        check_totals(&e, max_total_amount_in, 0);

        let settlement = Settlement::open(&e, &trader, &token_in, &token_out);
        let total_out = multihop::implied_total(
            &e,
            &sequences,
            settlement.pool_token_in(),
            settlement.pool_token_out(),
            SwapKind::ExactOut,
        );
        settlement.collect(max_total_amount_in);

        let mut total_in: i128 = 0;
        for sequence in sequences.iter() {
            let budget = max_total_amount_in - total_in;
            let sold = multihop::swap_exact_out(&e, &sequence, budget, settlement.trader());
            total_in = router::checked_sum(&e, total_in, sold);
        }
        if total_in > max_total_amount_in {
            panic_with_error!(&e, RouterError::SlippageExceeded);
        }

        settlement.pay_out(total_out);
        settlement.refund(max_total_amount_in - total_in);
        Events::new(&e).batch_swap(trader, token_in, token_out, total_in, total_out);
        total_in
    }

    // Spot price of token_out in token_in for the given weighted pool state
    pub fn calc_spot_price(
        e: Env,
        balance_in: i128,
        weight_in: i128,
        balance_out: i128,
        weight_out: i128,
        swap_fee: i128,
    ) -> i128 {
        pricing::calc_spot_price(&e, balance_in, weight_in, balance_out, weight_out, swap_fee)
    }

    // Amount bought for an exact amount sold into the given weighted pool state
    pub fn calc_out_given_in(
        e: Env,
        balance_in: i128,
        weight_in: i128,
        balance_out: i128,
        weight_out: i128,
        amount_in: i128,
        swap_fee: i128,
    ) -> i128 {
        pricing::calc_out_given_in(
            &e,
            balance_in,
            weight_in,
            balance_out,
            weight_out,
            amount_in,
            swap_fee,
        )
    }

    // Amount sold for an exact amount bought from the given weighted pool state
    pub fn calc_in_given_out(
        e: Env,
        balance_in: i128,
        weight_in: i128,
        balance_out: i128,
        weight_out: i128,
        amount_out: i128,
        swap_fee: i128,
    ) -> i128 {
        pricing::calc_in_given_out(
            &e,
            balance_in,
            weight_in,
            balance_out,
            weight_out,
            amount_out,
            swap_fee,
        )
    }
}

// Request input must be positive, min output non-negative
fn check_totals(e: &Env, amount_in: i128, min_amount_out: i128) {
    if amount_in <= 0 || min_amount_out < 0 {
        panic_with_error!(e, RouterError::InvalidSwap);
    }
}

// Pulled input must cover the steps; native input must match them exactly
fn check_funding(e: &Env, settlement: &Settlement, implied_in: i128, total_amount_in: i128) {
    if settlement.is_native_in() && implied_in != total_amount_in {
        panic_with_error!(e, RouterError::NativeCoinMismatch);
    }
    if implied_in > total_amount_in {
        panic_with_error!(e, RouterError::InvalidSwap);
    }
}

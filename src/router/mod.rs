pub mod batch;
pub mod multihop;

use soroban_sdk::{panic_with_error, Address, Env};

use crate::{
    adapters::adapter::{pool_adapter, PoolAdapter},
    allowance,
    events::{Events, RouterEvents},
    types::{error::RouterError, swapinfo::PoolSwap},
};

// Which side of a swap step is fixed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwapKind {
    ExactIn,
    ExactOut,
}

// Sell exactly `amount_in` on the pool, return the amount received
//
// # Panics
//
// Panics if the pool moved different amounts than it reported
// Panics if the output is below `min_amount_out`
// Panics if the spot price after the swap exceeds `max_price`
pub fn swap_in(
    e: &Env,
    pool: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_in: i128,
    min_amount_out: i128,
    max_price: i128,
) -> i128 {
    let adapter = pool_adapter(e, pool);
    let in_before = allowance::balance(e, token_in);
    let out_before = allowance::balance(e, token_out);
    let result =
        adapter.swap_exact_amount_in(token_in, amount_in, token_out, min_amount_out, max_price);
    verify_transfers(e, token_in, token_out, in_before, out_before, &result);
    if result.amount_out < min_amount_out {
        panic_with_error!(e, RouterError::SlippageExceeded);
    }
    check_price(e, &result, max_price);
    emit_swap(e, adapter.address(), token_in, token_out, &result);
    result.amount_out
}

// Buy exactly `amount_out` on the pool, return the amount paid
//
// # Panics
//
// Panics if the pool moved different amounts than it reported
// Panics if the input is above `max_amount_in`
// Panics if the spot price after the swap exceeds `max_price`
pub fn swap_out(
    e: &Env,
    pool: &Address,
    token_in: &Address,
    token_out: &Address,
    max_amount_in: i128,
    amount_out: i128,
    max_price: i128,
) -> i128 {
    if max_amount_in <= 0 {
        panic_with_error!(e, RouterError::SlippageExceeded);
    }
    let adapter = pool_adapter(e, pool);
    let in_before = allowance::balance(e, token_in);
    let out_before = allowance::balance(e, token_out);
    let result =
        adapter.swap_exact_amount_out(token_in, max_amount_in, token_out, amount_out, max_price);
    if result.amount_out != amount_out {
        panic_with_error!(e, RouterError::PoolMisconduct);
    }
    verify_transfers(e, token_in, token_out, in_before, out_before, &result);
    if result.amount_in > max_amount_in {
        panic_with_error!(e, RouterError::SlippageExceeded);
    }
    check_price(e, &result, max_price);
    emit_swap(e, adapter.address(), token_in, token_out, &result);
    result.amount_in
}

// Reported amounts must match the router balance changes
fn verify_transfers(
    e: &Env,
    token_in: &Address,
    token_out: &Address,
    in_before: i128,
    out_before: i128,
    result: &PoolSwap,
) {
    let spent = in_before - allowance::balance(e, token_in);
    let received = allowance::balance(e, token_out) - out_before;
    if spent != result.amount_in || received != result.amount_out {
        panic_with_error!(e, RouterError::PoolMisconduct);
    }
}

fn check_price(e: &Env, result: &PoolSwap, max_price: i128) {
    if result.spot_price_after > max_price {
        panic_with_error!(e, RouterError::PriceBoundExceeded);
    }
}

fn emit_swap(e: &Env, pool: &Address, token_in: &Address, token_out: &Address, result: &PoolSwap) {
    Events::new(e).swap(
        pool.clone(),
        token_in.clone(),
        token_out.clone(),
        result.amount_in,
        result.amount_out,
        result.spot_price_after,
    );
}

// Step amounts are positive, limits non-negative, price caps positive
pub fn check_step(e: &Env, amount: i128, limit: i128, max_price: i128) {
    if amount <= 0 || limit < 0 || max_price <= 0 {
        panic_with_error!(e, RouterError::InvalidSwap);
    }
}

// Input the pool asks for `amount_out` right now must fit under `max_amount_in`,
// the step limit capped by what is left of the request budget
//
// # Panics
//
// Panics with SlippageExceeded if nothing is left or the quote is above the cap
pub fn check_quote(
    e: &Env,
    pool: &Address,
    token_in: &Address,
    token_out: &Address,
    amount_out: i128,
    max_amount_in: i128,
) {
    if max_amount_in <= 0 {
        panic_with_error!(e, RouterError::SlippageExceeded);
    }
    let quoted = pool_adapter(e, pool).quote_in_given_out(token_in, token_out, amount_out);
    if quoted > max_amount_in {
        panic_with_error!(e, RouterError::SlippageExceeded);
    }
}

pub fn checked_sum(e: &Env, a: i128, b: i128) -> i128 {
    a.checked_add(b)
        .unwrap_or_else(|| panic_with_error!(e, RouterError::MathOverflow))
}

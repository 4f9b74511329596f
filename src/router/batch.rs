use soroban_sdk::{panic_with_error, Address, Env, Vec};

use super::{check_quote, check_step, checked_sum, swap_in, swap_out};
use crate::types::{error::RouterError, swap::Swap};

// Validate batch steps and sum their declared amounts
//
// For exact-in batches the sum is the implied total input, for exact-out
// batches the total output delivered to the trader
pub fn implied_total(e: &Env, swaps: &Vec<Swap>) -> i128 {
    if swaps.is_empty() {
        panic_with_error!(e, RouterError::InvalidSwap);
    }
    let mut total: i128 = 0;
    for swap in swaps.iter() {
        check_step(e, swap.amount, swap.limit, swap.max_price);
        total = checked_sum(e, total, swap.amount);
    }
    total
}

// Sell each step amount on its pool in declared order, return the total bought
pub fn swap_exact_in(e: &Env, swaps: &Vec<Swap>, token_in: &Address, token_out: &Address) -> i128 {
    let mut total_out: i128 = 0;
    for swap in swaps.iter() {
        let bought = swap_in(
            e,
            &swap.pool,
            token_in,
            token_out,
            swap.amount,
            swap.limit,
            swap.max_price,
        );
        total_out = checked_sum(e, total_out, bought);
    }
    total_out
}

// Buy each step amount on its pool in declared order, return the total sold.
// A step whose current quote exceeds its limit or the budget left under
// `max_total_amount_in` fails the batch; the grant is capped the same way
pub fn swap_exact_out(
    e: &Env,
    swaps: &Vec<Swap>,
    token_in: &Address,
    token_out: &Address,
    max_total_amount_in: i128,
) -> i128 {
    let mut total_in: i128 = 0;
    for swap in swaps.iter() {
        let max_in = swap.limit.min(max_total_amount_in - total_in);
        check_quote(e, &swap.pool, token_in, token_out, swap.amount, max_in);
        let sold = swap_out(
            e,
            &swap.pool,
            token_in,
            token_out,
            max_in,
            swap.amount,
            swap.max_price,
        );
        total_in = checked_sum(e, total_in, sold);
    }
    total_in
}

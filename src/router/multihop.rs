use soroban_sdk::{log, panic_with_error, Address, Env, Vec};

use super::{check_quote, check_step, checked_sum, swap_in, swap_out, SwapKind};
use crate::{
    adapters::adapter::{pool_adapter, PoolAdapter},
    allowance,
    types::{error::RouterError, hop::HopSwap},
};

// Validate sequences against the request endpoints and sum the bounding amounts
//
// # Arguments
//
// * `sequences` - Swap sequences, each listed in forward hop order
// * `token_in` - Token every sequence starts with
// * `token_out` - Token every sequence ends with
// * `kind` - ExactIn sums first hop inputs, ExactOut sums last hop outputs
//
// # Panics
//
// Panics if a sequence is empty or its bounding amount is not positive
// Panics if hops do not chain from `token_in` to `token_out`
pub fn implied_total(
    e: &Env,
    sequences: &Vec<Vec<HopSwap>>,
    token_in: &Address,
    token_out: &Address,
    kind: SwapKind,
) -> i128 {
    if sequences.is_empty() {
        panic_with_error!(e, RouterError::InvalidSwap);
    }
    let mut total: i128 = 0;
    for sequence in sequences.iter() {
        if sequence.is_empty() {
            panic_with_error!(e, RouterError::InvalidSwap);
        }
        let first = sequence.first_unchecked();
        let last = sequence.last_unchecked();
        if &first.token_in != token_in || &last.token_out != token_out {
            panic_with_error!(e, RouterError::InvalidPath);
        }
        let mut prev: Option<Address> = None;
        for hop in sequence.iter() {
            if hop.token_in == hop.token_out {
                panic_with_error!(e, RouterError::InvalidPath);
            }
            if let Some(prev_out) = prev {
                if prev_out != hop.token_in {
                    panic_with_error!(e, RouterError::InvalidPath);
                }
            }
            if hop.limit < 0 || hop.max_price <= 0 {
                panic_with_error!(e, RouterError::InvalidSwap);
            }
            prev = Some(hop.token_out.clone());
        }
        let bounding = match kind {
            SwapKind::ExactIn => first,
            SwapKind::ExactOut => last,
        };
        check_step(e, bounding.amount, bounding.limit, bounding.max_price);
        total = checked_sum(e, total, bounding.amount);
    }
    total
}

// Execute one sequence selling the first hop amount, return the final hop output
//
// Every later hop sells exactly what the previous hop returned; the amount
// supplied by the client for intermediate hops is never used
pub fn swap_exact_in(e: &Env, sequence: &Vec<HopSwap>) -> i128 {
    let mut amount = sequence.first_unchecked().amount;
    for (k, hop) in sequence.iter().enumerate() {
        if k > 0 && hop.amount != amount {
            log!(e, "hop input replaced by observed amount", k as u32, hop.amount, amount);
        }
        amount = swap_in(
            e,
            &hop.pool,
            &hop.token_in,
            &hop.token_out,
            amount,
            hop.limit,
            hop.max_price,
        );
    }
    amount
}

// Execute one sequence buying the last hop amount, return the first hop input
//
// Target outputs are resolved from the destination backwards, each earlier hop
// must produce what the following pool needs at its current state. Hops then
// settle in forward order; an intermediate hop may spend at most what the
// previous hop produced and any unspent intermediate remainder goes to `trader`.
//
// # Arguments
//
// * `sequence` - Hops in forward order
// * `budget` - Max input the first hop may spend, checked against its live quote
// * `trader` - Recipient of intermediate leftovers
pub fn swap_exact_out(e: &Env, sequence: &Vec<HopSwap>, budget: i128, trader: &Address) -> i128 {
    let targets = resolve_targets(e, sequence);
    let mut sold: i128 = 0;
    let mut available: i128 = 0;
    for (k, hop) in sequence.iter().enumerate() {
        let target = targets.get_unchecked(k as u32);
        let max_in = if k == 0 {
            hop.limit.min(budget)
        } else {
            hop.limit.min(available)
        };
        check_quote(e, &hop.pool, &hop.token_in, &hop.token_out, target, max_in);
        let spent = swap_out(
            e,
            &hop.pool,
            &hop.token_in,
            &hop.token_out,
            max_in,
            target,
            hop.max_price,
        );
        if k == 0 {
            sold = spent;
        } else {
            allowance::push(e, &hop.token_in, trader, available - spent);
        }
        available = target;
    }
    sold
}

// Per-hop target outputs, last hop first resolved from the declared amount
fn resolve_targets(e: &Env, sequence: &Vec<HopSwap>) -> Vec<i128> {
    let len = sequence.len();
    let mut targets: Vec<i128> = Vec::new(e);
    let mut target = sequence.last_unchecked().amount;
    for k in (0..len).rev() {
        let hop = sequence.get_unchecked(k);
        if k + 1 < len && hop.amount != target {
            log!(e, "hop output replaced by quoted amount", k, hop.amount, target);
        }
        targets.push_front(target);
        if k > 0 {
            target = pool_adapter(e, &hop.pool).quote_in_given_out(
                &hop.token_in,
                &hop.token_out,
                target,
            );
        }
    }
    targets
}

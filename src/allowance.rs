use soroban_sdk::{panic_with_error, token::TokenClient, Address, Env};

use crate::types::error::RouterError;

// Move tokens pre-approved by `from` to the router balance
//
// # Panics
//
// Panics if `from` approved less than `amount` to the router
// Panics if `from` holds less than `amount`
pub fn pull(e: &Env, token: &Address, from: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    let router = e.current_contract_address();
    let client = TokenClient::new(e, token);
    if client.allowance(from, &router) < amount {
        panic_with_error!(e, RouterError::InsufficientAllowance);
    }
    if client.balance(from) < amount {
        panic_with_error!(e, RouterError::InsufficientBalance);
    }
    client.transfer_from(&router, from, &router, &amount);
}

// Let `pool` spend exactly `amount` of router tokens during the current ledger
pub fn grant(e: &Env, token: &Address, pool: &Address, amount: i128) {
    TokenClient::new(e, token).approve(
        &e.current_contract_address(),
        pool,
        &amount,
        &e.ledger().sequence(),
    );
}

// Reset whatever part of a grant the pool left unused
pub fn revoke(e: &Env, token: &Address, pool: &Address) {
    let router = e.current_contract_address();
    let client = TokenClient::new(e, token);
    if client.allowance(&router, pool) > 0 {
        client.approve(&router, pool, &0, &e.ledger().sequence());
    }
}

// Send router-held tokens to `to`
pub fn push(e: &Env, token: &Address, to: &Address, amount: i128) {
    if amount > 0 {
        TokenClient::new(e, token).transfer(&e.current_contract_address(), to, &amount);
    }
}

// Router balance of the token
pub fn balance(e: &Env, token: &Address) -> i128 {
    TokenClient::new(e, token).balance(&e.current_contract_address())
}

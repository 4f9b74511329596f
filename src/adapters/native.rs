use soroban_sdk::{contractclient, panic_with_error, Address, Env};

use crate::{
    allowance,
    extensions::auth_helper::add_transfer_auth,
    types::{error::RouterError, native::NativeConfig},
};

#[contractclient(name = "NativeWrapperClient")]
#[allow(dead_code)]
pub trait NativeWrapperTrait {
    // Wrapped token address
    fn token(e: Env) -> Address;

    // Take `amount` native coin from `from`, mint the same amount of wrapped token to it
    fn deposit(e: Env, from: Address, amount: i128);

    // Take `amount` wrapped token from `to`, send the same amount of native coin back
    fn withdraw(e: Env, to: Address, amount: i128);
}

// Convert router-held native coin to wrapped tokens
pub fn wrap(e: &Env, config: &NativeConfig, amount: i128) {
    if amount == 0 {
        return;
    }
    let router = e.current_contract_address();
    let before = allowance::balance(e, &config.wrapped);
    add_transfer_auth(e, &config.wrapper, &config.native, amount);
    NativeWrapperClient::new(e, &config.wrapper).deposit(&router, &amount);
    if allowance::balance(e, &config.wrapped) - before != amount {
        panic_with_error!(e, RouterError::NativeCoinMismatch);
    }
}

// Convert router-held wrapped tokens back to native coin
pub fn unwrap(e: &Env, config: &NativeConfig, amount: i128) {
    if amount == 0 {
        return;
    }
    let router = e.current_contract_address();
    let before = allowance::balance(e, &config.native);
    add_transfer_auth(e, &config.wrapper, &config.wrapped, amount);
    NativeWrapperClient::new(e, &config.wrapper).withdraw(&router, &amount);
    if allowance::balance(e, &config.native) - before != amount {
        panic_with_error!(e, RouterError::NativeCoinMismatch);
    }
}

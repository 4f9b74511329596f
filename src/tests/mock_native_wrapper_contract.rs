#![allow(dead_code)]
use soroban_sdk::{
    contract, contractimpl,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

// Native coin wrapper; must be the admin of the wrapped token
#[contract]
pub struct MockNativeWrapperContract;

#[contractimpl]
impl MockNativeWrapperContract {
    pub fn init(e: Env, native: Address, wrapped: Address) {
        e.storage().instance().set(&"native", &native);
        e.storage().instance().set(&"wrapped", &wrapped);
        e.storage().instance().set(&"haircut", &0i128);
    }

    // Mint less wrapped token than deposited
    pub fn set_haircut(e: Env, haircut: i128) {
        e.storage().instance().set(&"haircut", &haircut);
    }

    pub fn token(e: Env) -> Address {
        e.storage().instance().get(&"wrapped").unwrap()
    }

    pub fn deposit(e: Env, from: Address, amount: i128) {
        from.require_auth();
        let native: Address = e.storage().instance().get(&"native").unwrap();
        let haircut: i128 = e.storage().instance().get(&"haircut").unwrap();
        TokenClient::new(&e, &native).transfer(&from, &e.current_contract_address(), &amount);
        StellarAssetClient::new(&e, &Self::token(e.clone())).mint(&from, &(amount - haircut));
    }

    pub fn withdraw(e: Env, to: Address, amount: i128) {
        to.require_auth();
        let native: Address = e.storage().instance().get(&"native").unwrap();
        let wrapper = e.current_contract_address();
        let wrapped = TokenClient::new(&e, &Self::token(e.clone()));
        wrapped.transfer(&to, &wrapper, &amount);
        wrapped.burn(&wrapper, &amount);
        TokenClient::new(&e, &native).transfer(&wrapper, &to, &amount);
    }
}

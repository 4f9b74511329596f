use soroban_sdk::{panic_with_error, Address, Env};

use crate::{
    adapters::native,
    allowance,
    extensions::env_extensions::EnvExtensions,
    types::{error::RouterError, native::NativeConfig},
};

// Trader-facing side of a request: resolves the native endpoints to the wrapped
// token the pools trade, collects the input and pays out the result
pub struct Settlement {
    env: Env,
    trader: Address,
    token_in: Address,
    token_out: Address,
    pool_token_in: Address,
    pool_token_out: Address,
    config: NativeConfig,
}

impl Settlement {
    // # Panics
    //
    // Panics if the contract is not initialized
    // Panics if both endpoints resolve to the same pool token
    pub fn open(e: &Env, trader: &Address, token_in: &Address, token_out: &Address) -> Self {
        let config = e.get_native_config();
        let pool_token_in = resolve(&config, token_in);
        let pool_token_out = resolve(&config, token_out);
        if pool_token_in == pool_token_out {
            panic_with_error!(e, RouterError::InvalidPath);
        }
        Settlement {
            env: e.clone(),
            trader: trader.clone(),
            token_in: token_in.clone(),
            token_out: token_out.clone(),
            pool_token_in,
            pool_token_out,
            config,
        }
    }

    pub fn pool_token_in(&self) -> &Address {
        &self.pool_token_in
    }

    pub fn pool_token_out(&self) -> &Address {
        &self.pool_token_out
    }

    pub fn is_native_in(&self) -> bool {
        self.token_in == self.config.native
    }

    pub fn is_native_out(&self) -> bool {
        self.token_out == self.config.native
    }

    pub fn trader(&self) -> &Address {
        &self.trader
    }

    // Pull the request input from the trader, wrapping native coin
    pub fn collect(&self, amount: i128) {
        allowance::pull(&self.env, &self.token_in, &self.trader, amount);
        if self.is_native_in() {
            native::wrap(&self.env, &self.config, amount);
        }
    }

    // Send the request output to the trader, unwrapping to native coin
    pub fn pay_out(&self, amount: i128) {
        if self.is_native_out() {
            native::unwrap(&self.env, &self.config, amount);
        }
        allowance::push(&self.env, &self.token_out, &self.trader, amount);
    }

    // Return unspent input to the trader in the form it was collected
    pub fn refund(&self, amount: i128) {
        if self.is_native_in() {
            native::unwrap(&self.env, &self.config, amount);
        }
        allowance::push(&self.env, &self.token_in, &self.trader, amount);
    }
}

// Native coin endpoints trade as the wrapped token
fn resolve(config: &NativeConfig, token: &Address) -> Address {
    if token == &config.native {
        config.wrapped.clone()
    } else {
        token.clone()
    }
}

#![allow(non_upper_case_globals)]
use soroban_sdk::storage::Instance;
use soroban_sdk::{panic_with_error, Address, Env};

use crate::types::{error::RouterError, native::NativeConfig};

const ADMIN_KEY: &str = "admin";
const NATIVE_KEY: &str = "native";
const LOCK_KEY: &str = "lock";

pub trait EnvExtensions {
    fn get_admin(&self) -> Option<Address>;

    fn set_admin(&self, admin: &Address);

    fn get_native_config(&self) -> NativeConfig;

    fn set_native_config(&self, config: &NativeConfig);

    fn bump_instance(&self);

    fn panic_if_not_admin(&self);

    fn panic_if_expired(&self, deadline: u64);

    fn is_initialized(&self) -> bool;

    fn is_locked(&self) -> bool;
}

impl EnvExtensions for Env {
    fn is_initialized(&self) -> bool {
        get_instance_storage(&self).has(&ADMIN_KEY)
    }

    fn get_admin(&self) -> Option<Address> {
        get_instance_storage(&self).get(&ADMIN_KEY)
    }

    fn set_admin(&self, admin: &Address) {
        get_instance_storage(&self).set(&ADMIN_KEY, admin);
    }

    fn get_native_config(&self) -> NativeConfig {
        get_instance_storage(&self)
            .get(&NATIVE_KEY)
            .unwrap_or_else(|| panic_with_error!(self, RouterError::NotInitialized))
    }

    fn set_native_config(&self, config: &NativeConfig) {
        get_instance_storage(&self).set(&NATIVE_KEY, config);
    }

    fn panic_if_not_admin(&self) {
        match self.get_admin() {
            Some(admin) => admin.require_auth(),
            None => panic_with_error!(self, RouterError::Unauthorized),
        }
    }

    fn panic_if_expired(&self, deadline: u64) {
        if self.ledger().timestamp() > deadline {
            panic_with_error!(self, RouterError::DeadlineExceeded);
        }
    }

    fn is_locked(&self) -> bool {
        self.storage().temporary().has(&LOCK_KEY)
    }

    //extend for 20 days if less than 10 days TTL left
    fn bump_instance(&self) {
        self.storage()
            .instance()
            .extend_ttl(LPH * 24 * 10, LPH * 24 * 20);
    }
}

// Mutual exclusion shared by all swap entry points.
// Released when dropped; a failed invocation rolls the flag back with the rest of the state.
pub struct ReentrancyLock {
    env: Env,
}

impl ReentrancyLock {
    pub fn acquire(e: &Env) -> Self {
        if e.is_locked() {
            panic_with_error!(e, RouterError::Reentrancy);
        }
        e.storage().temporary().set(&LOCK_KEY, &true);
        ReentrancyLock { env: e.clone() }
    }
}

impl Drop for ReentrancyLock {
    fn drop(&mut self) {
        self.env.storage().temporary().remove(&LOCK_KEY);
    }
}

const LPH: u32 = 720;

fn get_instance_storage(e: &Env) -> Instance {
    e.storage().instance()
}

use soroban_sdk::{contracttype, Address};

// Native coin handling settings
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct NativeConfig {
    // Native coin token contract, also used as the native endpoint marker
    pub native: Address,
    // Wrapper contract converting native coin to the wrapped token and back
    pub wrapper: Address,
    // Wrapped token traded by the pools
    pub wrapped: Address,
}

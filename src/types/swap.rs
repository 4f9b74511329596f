use soroban_sdk::{contracttype, Address};

// Single-pool step of a batch swap over one token pair
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Swap {
    // LP contract address
    pub pool: Address,
    // Exact input (exact-in) or exact output (exact-out)
    pub amount: i128,
    // Min output (exact-in) or max input (exact-out)
    pub limit: i128,
    // Max acceptable spot price after the swap
    pub max_price: i128,
}

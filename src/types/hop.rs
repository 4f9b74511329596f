use soroban_sdk::{contracttype, Address};

// Multihop sequence step
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct HopSwap {
    // LP contract address
    pub pool: Address,
    // Selling token address
    pub token_in: Address,
    // Buying token address
    pub token_out: Address,
    // Exact input (exact-in) or exact output (exact-out); only the first hop
    // (exact-in) or the last hop (exact-out) value is used
    pub amount: i128,
    // Min output (exact-in) or max input (exact-out)
    pub limit: i128,
    // Max acceptable spot price after the swap
    pub max_price: i128,
}

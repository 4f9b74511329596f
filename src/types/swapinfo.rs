// Result reported by an LP for a single executed swap
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PoolSwap {
    // Tokens sent to the pool
    pub amount_in: i128,
    // Tokens received from the pool
    pub amount_out: i128,
    // Pool spot price after the swap
    pub spot_price_after: i128,
}

use soroban_sdk::contracterror;

// Standard contract errors
#[contracterror]
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RouterError {
    // Caller is not allowed to execute this function
    Unauthorized = 32_700,
    // Contract has not been initialized yet
    NotInitialized = 32_701,
    // Cannot initialize the contract for the second time
    AlreadyInitialized = 32_702,
    // Empty request, non-positive amount or malformed bound
    InvalidSwap = 32_710,
    // Hops do not chain or do not match the request endpoints
    InvalidPath = 32_711,
    // Trader has not approved enough tokens to the router
    InsufficientAllowance = 32_720,
    // Trader balance cannot cover the pulled amount
    InsufficientBalance = 32_721,
    // Pool reserves cannot serve the requested amount
    InsufficientLiquidity = 32_730,
    // Local or global amount bound violated
    SlippageExceeded = 32_731,
    // Pool spot price after the swap is above the step limit
    PriceBoundExceeded = 32_732,
    // Request submitted after its deadline
    DeadlineExceeded = 32_733,
    // Native coin amount does not match the declared or wrapped amount
    NativeCoinMismatch = 32_734,
    // LP moved a different amount than it reported
    PoolMisconduct = 32_735,
    // Entry point invoked while another one is executing
    Reentrancy = 32_736,
    // Fixed-point arithmetic out of range
    MathOverflow = 32_740,
}

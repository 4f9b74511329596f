pub mod adapter;
pub mod native;
pub mod weighted_pool;

pub mod error;
pub mod hop;
pub mod native;
pub mod swap;
pub mod swapinfo;

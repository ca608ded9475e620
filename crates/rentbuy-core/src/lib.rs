pub mod comparison;
pub mod error;
pub mod market_data;
pub mod types;

pub use error::RentBuyError;
pub use types::*;

/// Standard result type for all rent-vs-buy operations
pub type RentBuyResult<T> = Result<T, RentBuyError>;

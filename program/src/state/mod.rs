
pub mod asset_pair;  // AssetPair
pub mod pool;        // Pool
pub mod pool_state;  // PoolState

// Re-export the types so everyone can `use crate::state::{...}`.
pub use asset_pair::AssetPair;
pub use pool::Pool;
pub use pool_state::PoolState;

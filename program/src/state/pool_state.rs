use crate::state::pool::Pool;

pub enum PoolState {
    Uninitialized,
    Initialized(Pool),
}

impl PoolState {
    /// The fixed number of bytes used to serialize each pool account
    pub const fn size_of() -> usize {
        110 // 4-byte tag + packed Pool fields, layout in helpers::serialization
    }
}

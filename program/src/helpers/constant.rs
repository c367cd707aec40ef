/// Trailing seed of the pool address: [owner, pair seed, POOL_KEY]
pub const POOL_KEY: &[u8] = b"pool";
/// Trailing seed of the vault address: [pool, mint, TOKEN_KEY]
pub const TOKEN_KEY: &[u8] = b"token";

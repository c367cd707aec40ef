use pinocchio::pubkey::Pubkey;
use shank::ShankAccount;

use crate::state::asset_pair::AssetPair;

/// Pool record as it lives in the account, after the state tag.
/// The balance is kept as little-endian bytes to match the account image.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ShankAccount)]
pub struct Pool {
    /// Asset pair this pool was opened for
    pub pair: AssetPair,
    /// Canonical bump of the pool address
    pub pool_bump: u8,
    /// Authority allowed to withdraw from the vault
    pub owner: Pubkey,
    /// Running token balance, maintained by deposit/withdraw
    pub balance: [u8; 8],
    /// Token account holding the pooled funds, authority is the pool itself
    pub vault: Pubkey,
    /// Mint of the pooled token
    pub mint: Pubkey,
}

impl Pool {
    #[inline]
    pub fn balance(&self) -> u64 {
        u64::from_le_bytes(self.balance)
    }

    #[inline]
    pub fn set_balance(&mut self, value: u64) {
        self.balance = value.to_le_bytes();
    }
}

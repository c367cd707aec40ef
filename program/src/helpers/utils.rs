use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    pubkey::{self, Pubkey},
};

use crate::error::{to_program_error, PoolError};
use crate::helpers::constant::{POOL_KEY, TOKEN_KEY};
use crate::state::{AssetPair, PoolState};
use crate::ID;

pub fn next_account_info<'a, I: Iterator<Item = &'a AccountInfo>>(
    iter: &mut I,
) -> Result<&'a AccountInfo, ProgramError> {
    iter.next().ok_or(ProgramError::NotEnoughAccountKeys)
}

/// Canonical pool address for (owner, pair), with its bump.
pub fn derive_pool_address(owner: &Pubkey, pair: AssetPair) -> (Pubkey, u8) {
    pubkey::find_program_address(&[owner.as_ref(), pair.seed(), POOL_KEY], &ID)
}

/// Canonical vault address for (pool, mint), with its bump.
pub fn derive_vault_address(pool: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    pubkey::find_program_address(&[pool.as_ref(), mint.as_ref(), TOKEN_KEY], &ID)
}

// Load pool state from account via manual deserialize
pub fn get_pool_state(pool_account_info: &AccountInfo) -> Result<PoolState, ProgramError> {
    if *pool_account_info.owner() != ID {
        return Err(ProgramError::InvalidAccountOwner);
    }
    let data = unsafe { pool_account_info.borrow_data_unchecked() };
    PoolState::deserialize(data)
}

// Write pool state back into account via manual serialize
pub fn set_pool_state(
    pool_account_info: &AccountInfo,
    pool_state: &PoolState,
) -> Result<(), ProgramError> {
    let data = unsafe { pool_account_info.borrow_mut_data_unchecked() };
    pool_state.serialize(data)
}

#[inline]
pub(crate) fn checked_add(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_add(b).ok_or(ProgramError::ArithmeticOverflow)
}

#[inline]
pub(crate) fn checked_sub(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_sub(b)
        .ok_or_else(|| to_program_error(PoolError::InsufficientPoolBalance))
}

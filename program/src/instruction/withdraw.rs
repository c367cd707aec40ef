use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_token::instructions::Transfer;

use crate::error::{to_program_error, PoolError};
use crate::helpers::{
    checked_sub, get_pool_state, next_account_info, set_pool_state, POOL_KEY,
};
use crate::state::PoolState;

/// Pay tokens out of the vault to a recipient. Only the recorded owner may
/// withdraw, and the vault authority is the pool itself, so the transfer
/// is signed with the pool seeds.
pub fn process_withdraw(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let owner_info = next_account_info(account_info_iter)?;
    let pool_info = next_account_info(account_info_iter)?;
    let vault_info = next_account_info(account_info_iter)?;
    let recipient_token_info = next_account_info(account_info_iter)?;

    let PoolState::Initialized(mut pool) = get_pool_state(pool_info)? else {
        return Err(to_program_error(PoolError::InvalidPool));
    };

    if pool.owner != *owner_info.key() || !owner_info.is_signer() {
        return Err(to_program_error(PoolError::InvalidOwner));
    }
    if pool.vault != *vault_info.key() {
        return Err(to_program_error(PoolError::InvalidPool));
    }

    // The recorded balance caps withdrawals, whatever the vault holds.
    let remaining = checked_sub(pool.balance(), amount)?;

    let bump_seed = [pool.pool_bump];
    let pool_seeds = [
        Seed::from(pool.owner.as_ref()),
        Seed::from(pool.pair.seed()),
        Seed::from(POOL_KEY),
        Seed::from(&bump_seed[..]),
    ];
    Transfer {
        from: vault_info,
        to: recipient_token_info,
        authority: pool_info,
        amount,
    }
    .invoke_signed(&[Signer::from(&pool_seeds[..])])?;

    pool.set_balance(remaining);
    set_pool_state(pool_info, &PoolState::Initialized(pool))?;

    log!("withdrew {} from pool", amount);
    Ok(())
}

use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;
use pinocchio_token::instructions::Transfer;

use crate::error::{to_program_error, PoolError};
use crate::helpers::{checked_add, get_pool_state, set_pool_state};
use crate::state::PoolState;

/// Fund the vault from the payer's token account. The payer signs the
/// token transfer itself, no pool seeds are involved.
pub fn process_deposit(accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let [payer_info, pool_info, source_token_info, vault_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !payer_info.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }

    let PoolState::Initialized(mut pool) = get_pool_state(pool_info)? else {
        return Err(to_program_error(PoolError::InvalidPool));
    };

    if pool.vault != *vault_info.key() {
        return Err(to_program_error(PoolError::InvalidPool));
    }

    Transfer {
        from: source_token_info,
        to: vault_info,
        authority: payer_info,
        amount,
    }
    .invoke()?;

    pool.set_balance(checked_add(pool.balance(), amount)?);
    set_pool_state(pool_info, &PoolState::Initialized(pool))?;

    log!("deposited {} into pool", amount);
    Ok(())
}

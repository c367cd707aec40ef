use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    sysvars::rent::Rent,
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_system::instructions::CreateAccount;
use pinocchio_token::{instructions::InitializeAccount3, state::TokenAccount};

use crate::error::{to_program_error, PoolError};
use crate::helpers::*;
use crate::state::*;

/// Create the pool account at its canonical address, set up the token
/// vault under the pool's authority, and write the initial pool record.
pub fn initialize(accounts: &[AccountInfo], pair: AssetPair, bump: u8) -> ProgramResult {
    // payer funds both accounts; owner is recorded, it does not sign here
    let [payer_info, owner_info, pool_info, mint_info, vault_info, rent_info, _rest @ ..] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !payer_info.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }

    // The supplied bump must reproduce the canonical pool address.
    let (pool_address, canonical_bump) = derive_pool_address(owner_info.key(), pair);
    if bump != canonical_bump || pool_address != *pool_info.key() {
        return Err(to_program_error(PoolError::InvalidBump));
    }

    // A live pool is never overwritten.
    if pool_info.owner() == &crate::ID {
        return Err(to_program_error(PoolError::PoolAlreadyInUse));
    }

    let (vault_address, vault_bump) = derive_vault_address(pool_info.key(), mint_info.key());
    if vault_address != *vault_info.key() {
        return Err(to_program_error(PoolError::InvalidPool));
    }

    let rent = Rent::from_account_info(rent_info)?;

    let bump_seed = [bump];
    let pool_seeds = [
        Seed::from(owner_info.key().as_ref()),
        Seed::from(pair.seed()),
        Seed::from(POOL_KEY),
        Seed::from(&bump_seed[..]),
    ];
    CreateAccount {
        from: payer_info,
        to: pool_info,
        lamports: rent.minimum_balance(PoolState::size_of()),
        space: PoolState::size_of() as u64,
        owner: &crate::ID,
    }
    .invoke_signed(&[Signer::from(&pool_seeds[..])])?;

    let vault_bump_seed = [vault_bump];
    let vault_seeds = [
        Seed::from(pool_info.key().as_ref()),
        Seed::from(mint_info.key().as_ref()),
        Seed::from(TOKEN_KEY),
        Seed::from(&vault_bump_seed[..]),
    ];
    CreateAccount {
        from: payer_info,
        to: vault_info,
        lamports: rent.minimum_balance(TokenAccount::LEN),
        space: TokenAccount::LEN as u64,
        owner: &pinocchio_token::ID,
    }
    .invoke_signed(&[Signer::from(&vault_seeds[..])])?;

    InitializeAccount3 {
        account: vault_info,
        mint: mint_info,
        owner: pool_info.key(),
    }
    .invoke()?;

    let pool = Pool {
        pair,
        pool_bump: bump,
        owner: *owner_info.key(),
        balance: [0u8; 8],
        vault: *vault_info.key(),
        mint: *mint_info.key(),
    };
    set_pool_state(pool_info, &PoolState::Initialized(pool))?;

    log!("pool created");
    Ok(())
}

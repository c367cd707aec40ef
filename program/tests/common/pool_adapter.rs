use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    sysvar,
};

use pinocchio_asset_pool::helpers::constant::{POOL_KEY, TOKEN_KEY};
use pinocchio_asset_pool::state::AssetPair;

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(pinocchio_asset_pool::ID)
}

// ---------- Address derivation ----------
pub mod pda {
    use super::*;

    pub fn pool_address(owner: &Pubkey, pair: AssetPair) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[owner.as_ref(), pair.seed(), POOL_KEY], &program_id())
    }

    pub fn vault_address(pool: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[pool.as_ref(), mint.as_ref(), TOKEN_KEY], &program_id())
    }
}

// ---------- Instruction builders ----------
pub mod ixn {
    use super::*;

    #[inline]
    fn pair_byte(pair: AssetPair) -> u8 {
        match pair {
            AssetPair::BtcUsdc => 0,
            AssetPair::EthUsdc => 1,
        }
    }

    /// Initialize at the canonical pool/vault addresses.
    pub fn initialize(payer: &Pubkey, owner: &Pubkey, mint: &Pubkey, pair: AssetPair) -> Instruction {
        let (pool, bump) = pda::pool_address(owner, pair);
        let (vault, _) = pda::vault_address(&pool, mint);
        initialize_raw(payer, owner, &pool, mint, &vault, pair, bump)
    }

    /// Raw variant for exercising address/bump rejection paths.
    pub fn initialize_raw(
        payer: &Pubkey,
        owner: &Pubkey,
        pool: &Pubkey,
        mint: &Pubkey,
        vault: &Pubkey,
        pair: AssetPair,
        bump: u8,
    ) -> Instruction {
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new(*payer, true),
                AccountMeta::new_readonly(*owner, false),
                AccountMeta::new(*pool, false),
                AccountMeta::new_readonly(*mint, false),
                AccountMeta::new(*vault, false),
                AccountMeta::new_readonly(sysvar::rent::id(), false),
                AccountMeta::new_readonly(solana_sdk::system_program::id(), false),
                AccountMeta::new_readonly(spl_token::id(), false),
            ],
            data: vec![0, pair_byte(pair), bump],
        }
    }

    pub fn deposit(
        payer: &Pubkey,
        pool: &Pubkey,
        source_token: &Pubkey,
        vault: &Pubkey,
        amount: u64,
    ) -> Instruction {
        let mut data = Vec::with_capacity(1 + 8);
        data.push(1);
        data.extend_from_slice(&amount.to_le_bytes());
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new_readonly(*payer, true),
                AccountMeta::new(*pool, false),
                AccountMeta::new(*source_token, false),
                AccountMeta::new(*vault, false),
                AccountMeta::new_readonly(spl_token::id(), false),
            ],
            data,
        }
    }

    pub fn withdraw(
        owner: &Pubkey,
        pool: &Pubkey,
        vault: &Pubkey,
        recipient_token: &Pubkey,
        amount: u64,
    ) -> Instruction {
        let mut data = Vec::with_capacity(1 + 8);
        data.push(2);
        data.extend_from_slice(&amount.to_le_bytes());
        Instruction {
            program_id: program_id(),
            accounts: vec![
                AccountMeta::new_readonly(*owner, true),
                AccountMeta::new(*pool, false),
                AccountMeta::new(*vault, false),
                AccountMeta::new(*recipient_token, false),
                AccountMeta::new_readonly(spl_token::id(), false),
            ],
            data,
        }
    }
}

// ---------- State helpers ----------
pub async fn fetch_pool(
    banks_client: &mut solana_program_test::BanksClient,
    pool: &Pubkey,
) -> pinocchio_asset_pool::state::Pool {
    let account = banks_client
        .get_account(*pool)
        .await
        .unwrap()
        .expect("pool account should exist");
    match pinocchio_asset_pool::state::PoolState::deserialize(&account.data)
        .expect("valid pool account image")
    {
        pinocchio_asset_pool::state::PoolState::Initialized(pool) => pool,
        pinocchio_asset_pool::state::PoolState::Uninitialized => panic!("panic: uninitialized"),
    }
}

pub async fn get_pool_account_rent(banks_client: &mut solana_program_test::BanksClient) -> u64 {
    let rent = banks_client.get_rent().await.unwrap();
    rent.minimum_balance(pinocchio_asset_pool::state::PoolState::size_of())
}

// ---------- Error helpers ----------
pub mod err {
    use pinocchio_asset_pool::error::PoolError;
    use solana_program_test::BanksClientError;
    use solana_sdk::{instruction::InstructionError, transaction::TransactionError};

    /// Unwrap a banks-client failure down to the failing instruction error.
    pub fn instruction_error(e: BanksClientError) -> InstructionError {
        match e {
            BanksClientError::TransactionError(TransactionError::InstructionError(_, ie)) => ie,
            BanksClientError::SimulationError {
                err: TransactionError::InstructionError(_, ie),
                ..
            } => ie,
            other => panic!("expected an instruction error, got {other:?}"),
        }
    }

    pub fn matches_pool_error(ie: &InstructionError, expected: PoolError) -> bool {
        matches!(
            (ie, expected),
            (InstructionError::InvalidAccountData, PoolError::InvalidPool)
                | (InstructionError::InvalidSeeds, PoolError::InvalidBump)
                | (
                    InstructionError::MissingRequiredSignature,
                    PoolError::InvalidOwner
                )
                | (
                    InstructionError::AccountAlreadyInitialized,
                    PoolError::PoolAlreadyInUse
                )
                | (
                    InstructionError::InsufficientFunds,
                    PoolError::InsufficientPoolBalance
                )
        )
    }
}

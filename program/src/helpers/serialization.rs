use pinocchio::program_error::ProgramError;

use crate::state::{AssetPair, Pool, PoolState};

// Account image layout, always exactly PoolState::size_of() bytes:
//   [0..4]    u32 LE state tag (0 = Uninitialized, 1 = Initialized)
//   [4]       asset pair
//   [5]       pool bump
//   [6..38]   owner
//   [38..46]  balance, u64 LE
//   [46..78]  vault
//   [78..110] mint
const TAG_UNINITIALIZED: u32 = 0;
const TAG_INITIALIZED: u32 = 1;

impl PoolState {
    /// Manually deserialize account data to PoolState
    pub fn deserialize(data: &[u8]) -> Result<PoolState, ProgramError> {
        if data.len() < Self::size_of() {
            return Err(ProgramError::InvalidAccountData);
        }

        let mut tag = [0u8; 4];
        tag.copy_from_slice(&data[0..4]);
        match u32::from_le_bytes(tag) {
            TAG_UNINITIALIZED => Ok(PoolState::Uninitialized),
            TAG_INITIALIZED => {
                let pair = AssetPair::try_from(data[4])
                    .map_err(|_| ProgramError::InvalidAccountData)?;
                let pool_bump = data[5];

                let mut owner = [0u8; 32];
                owner.copy_from_slice(&data[6..38]);
                let mut balance = [0u8; 8];
                balance.copy_from_slice(&data[38..46]);
                let mut vault = [0u8; 32];
                vault.copy_from_slice(&data[46..78]);
                let mut mint = [0u8; 32];
                mint.copy_from_slice(&data[78..110]);

                Ok(PoolState::Initialized(Pool {
                    pair,
                    pool_bump,
                    owner,
                    balance,
                    vault,
                    mint,
                }))
            }
            _ => Err(ProgramError::InvalidAccountData),
        }
    }

    /// Manually serialize PoolState into account data
    pub fn serialize(&self, data: &mut [u8]) -> Result<(), ProgramError> {
        if data.len() < Self::size_of() {
            return Err(ProgramError::AccountDataTooSmall);
        }

        match self {
            PoolState::Uninitialized => {
                data[..Self::size_of()].fill(0);
            }
            PoolState::Initialized(pool) => {
                data[0..4].copy_from_slice(&TAG_INITIALIZED.to_le_bytes());
                data[4] = pool.pair as u8;
                data[5] = pool.pool_bump;
                data[6..38].copy_from_slice(&pool.owner);
                data[38..46].copy_from_slice(&pool.balance);
                data[46..78].copy_from_slice(&pool.vault);
                data[78..110].copy_from_slice(&pool.mint);
            }
        }
        Ok(())
    }
}

use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

pub mod deposit;
pub mod initialize;
pub mod withdraw;

pub use deposit::*;
pub use initialize::*;
pub use withdraw::*;

#[repr(u8)]
#[derive(ShankInstruction)]
pub enum PoolInstruction {
    /// Create the pool account and its token vault, then record the pool.
    #[account(0, writable, signer, name = "payer")]
    #[account(1, name = "owner")]
    #[account(2, writable, name = "pool")]
    #[account(3, name = "mint")]
    #[account(4, writable, name = "vault")]
    #[account(5, name = "rent_sysvar")]
    #[account(6, name = "system_program")]
    #[account(7, name = "token_program")]
    Initialize,
    /// Move tokens from the payer's token account into the vault.
    #[account(0, signer, name = "payer")]
    #[account(1, writable, name = "pool")]
    #[account(2, writable, name = "source_token")]
    #[account(3, writable, name = "vault")]
    #[account(4, name = "token_program")]
    Deposit,
    /// Pay tokens out of the vault, signed with the pool seeds.
    #[account(0, signer, name = "owner")]
    #[account(1, writable, name = "pool")]
    #[account(2, writable, name = "vault")]
    #[account(3, writable, name = "recipient_token")]
    #[account(4, name = "token_program")]
    Withdraw,
}

impl TryFrom<&u8> for PoolInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(PoolInstruction::Initialize),
            1 => Ok(PoolInstruction::Deposit),
            2 => Ok(PoolInstruction::Withdraw),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

use crate::instruction;
#[cfg(feature = "std")]
use bincode;
use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    // Enforce correct program id
    if *program_id != crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    // Decode PoolInstruction via bincode when building with std (host/dev)
    #[cfg(feature = "std")]
    {
        if let Ok(wire_ix) = bincode::deserialize::<wire::PoolInstruction>(instruction_data) {
            return dispatch_wire_instruction(accounts, wire_ix);
        }
    }

    // Fallback to single-byte discriminator + raw payload
    let (disc, payload) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    // Helper for u64 payloads (token amounts)
    let read_u64 = |data: &[u8]| -> Result<u64, ProgramError> {
        if data.len() != 8 {
            return Err(ProgramError::InvalidInstructionData);
        }
        let mut buf = [0u8; 8];
        buf.copy_from_slice(data);
        Ok(u64::from_le_bytes(buf))
    };

    match crate::instruction::PoolInstruction::try_from(disc)? {
        crate::instruction::PoolInstruction::Initialize => {
            msg!("Instruction: Initialize");
            // Expect 2 bytes: [0]=asset pair, [1]=pool bump
            let [pair_byte, bump] = payload else {
                return Err(ProgramError::InvalidInstructionData);
            };
            let pair = crate::state::AssetPair::try_from(*pair_byte)?;
            instruction::initialize::initialize(accounts, pair, *bump)
        }
        crate::instruction::PoolInstruction::Deposit => {
            msg!("Instruction: Deposit");
            let amount = read_u64(payload)?;
            instruction::deposit::process_deposit(accounts, amount)
        }
        crate::instruction::PoolInstruction::Withdraw => {
            msg!("Instruction: Withdraw");
            let amount = read_u64(payload)?;
            instruction::withdraw::process_withdraw(accounts, amount)
        }
    }
}

// Wire decoding for PoolInstruction (bincode) for std builds
#[cfg(feature = "std")]
mod wire {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub enum AssetPair {
        BtcUsdc,
        EthUsdc,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub enum PoolInstruction {
        Initialize { pair: AssetPair, bump: u8 },
        Deposit(u64),
        Withdraw(u64),
    }
}

#[cfg(feature = "std")]
fn dispatch_wire_instruction(accounts: &[AccountInfo], ix: wire::PoolInstruction) -> ProgramResult {
    use wire::*;
    match ix {
        PoolInstruction::Initialize { pair, bump } => {
            msg!("Instruction: Initialize");
            let pair = match pair {
                AssetPair::BtcUsdc => crate::state::AssetPair::BtcUsdc,
                AssetPair::EthUsdc => crate::state::AssetPair::EthUsdc,
            };
            instruction::initialize::initialize(accounts, pair, bump)
        }
        PoolInstruction::Deposit(amount) => {
            msg!("Instruction: Deposit");
            instruction::deposit::process_deposit(accounts, amount)
        }
        PoolInstruction::Withdraw(amount) => {
            msg!("Instruction: Withdraw");
            instruction::withdraw::process_withdraw(accounts, amount)
        }
    }
}

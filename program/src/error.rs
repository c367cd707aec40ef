use pinocchio::program_error::ProgramError;

// internal error enum, one variant per rejection the pool can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    InvalidPool,
    InvalidBump,
    InvalidOwner,
    PoolAlreadyInUse,
    InsufficientPoolBalance,
}

// map internal errors to standard program error
pub fn to_program_error(err: PoolError) -> ProgramError {
    match err {
        PoolError::InvalidPool => ProgramError::InvalidAccountData,
        PoolError::InvalidBump => ProgramError::InvalidSeeds,
        PoolError::InvalidOwner => ProgramError::MissingRequiredSignature,
        PoolError::PoolAlreadyInUse => ProgramError::AccountAlreadyInitialized,
        PoolError::InsufficientPoolBalance => ProgramError::InsufficientFunds,
    }
}

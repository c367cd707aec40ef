use pinocchio::program_error::ProgramError;
use shank::ShankType;

/// Asset pairs a pool can be opened for. Each pair contributes a stable
/// seed literal to the pool address derivation.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ShankType)]
pub enum AssetPair {
    BtcUsdc = 0,
    EthUsdc = 1,
}

impl AssetPair {
    pub const fn seed(self) -> &'static [u8] {
        match self {
            AssetPair::BtcUsdc => b"btcusdc",
            AssetPair::EthUsdc => b"ethusdc",
        }
    }
}

impl TryFrom<u8> for AssetPair {
    type Error = ProgramError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AssetPair::BtcUsdc),
            1 => Ok(AssetPair::EthUsdc),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}

use soroban_sdk::{contracttype, Address};

/// Vault configuration - bound once by the managing strategy
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    /// Only address allowed to mint and burn vault shares
    pub manager: Address,
}

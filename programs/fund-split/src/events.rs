use anchor_lang::prelude::*;

/// Event emitted when a split vault is initialized
#[event]
pub struct SplitVaultInitialized {
    /// The vault address
    pub vault: Pubkey,
    /// Authority that created the vault
    pub initializer: Pubkey,
    /// Seed the vault address is derived from
    pub seed: String,
    /// Withdrawal authorization mode
    pub secure_withdrawal: bool,
    /// Number of registered members
    pub member_count: u32,
    /// Timestamp of initialization
    pub timestamp: u64,
}

/// Event emitted when newly received funds are allocated to member claims
#[event]
pub struct FundsAllocated {
    /// The vault address
    pub vault: Pubkey,
    /// Newly received lamports covered by this allocation
    pub deposit_increment: u64,
    /// Total credited across members
    pub credited: u64,
    /// Uncredited remainder left in the vault balance
    pub remainder: u64,
    /// Timestamp of allocation
    pub timestamp: u64,
}

/// Event emitted when a member's allocated funds are withdrawn
#[event]
pub struct FundsWithdrawn {
    /// The vault address
    pub vault: Pubkey,
    /// Member whose claim was settled
    pub member: Pubkey,
    /// Signer that fronted the withdrawal
    pub payer: Pubkey,
    /// Lamports transferred to the member
    pub amount: u64,
    /// Timestamp of withdrawal
    pub timestamp: u64,
}

/// Event emitted when a split vault is closed
#[event]
pub struct SplitVaultClosed {
    /// The vault address
    pub vault: Pubkey,
    /// Authority the residual balance is refunded to
    pub initializer: Pubkey,
    /// Residual lamports refunded on close
    pub refunded: u64,
    /// Timestamp of closure
    pub timestamp: u64,
}

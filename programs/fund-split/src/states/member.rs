use anchor_lang::prelude::*;
use crate::math;

/// One payee entry in a split vault's registry. The address is opaque to the
/// program: it may be a wallet or another split vault (nesting vaults as
/// members is how distribution trees are built).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Member {
    /// Destination the member's funds are paid to
    pub address: Pubkey,
    /// Allocated balance not yet withdrawn, in lamports
    pub amount: u64,
    /// Whole-percent share of every deposit
    pub share: u8,
}

impl Member {
    /// address (32) + amount (8) + share (1)
    pub const LEN: usize = 32 + 8 + 1;

    pub fn new(address: Pubkey, share: u8) -> Self {
        Self {
            address,
            amount: 0,
            share,
        }
    }

    /// Credits newly allocated funds to this member's claim.
    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.amount = math::checked_add(self.amount, amount)?;
        Ok(())
    }

    /// Takes the member's full claim, leaving zero behind.
    pub fn clear(&mut self) -> u64 {
        let amount = self.amount;
        self.amount = 0;
        amount
    }
}

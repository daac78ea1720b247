use anchor_lang::prelude::*;

use crate::constants::SPLIT_VAULT_SEED;
use crate::errors::ErrorCode;
use crate::states::SplitVault;

#[derive(Accounts)]
pub struct Close<'info> {
    /// Only the vault's creating authority may close it; the residual
    /// balance (rent plus any unallocated remainder) is refunded here
    #[account(mut)]
    pub initializer: Signer<'info>,

    #[account(
        mut,
        has_one = initializer,
        close = initializer,
        seeds = [SPLIT_VAULT_SEED, split_vault.seed.as_bytes()],
        bump = split_vault.bump
    )]
    pub split_vault: Account<'info, SplitVault>,
}

impl<'info> Close<'info> {
    pub fn handle(ctx: Context<Close>) -> Result<()> {
        let vault = &ctx.accounts.split_vault;
        require!(
            vault.funds_withdrawn(),
            ErrorCode::MembersFundsHaveNotBeenWithdrawn
        );

        let refunded = vault.to_account_info().lamports();
        msg!(
            "Closing split vault {}, refunding {} lamports",
            vault.key(),
            refunded
        );

        emit!(crate::events::SplitVaultClosed {
            vault: vault.key(),
            initializer: ctx.accounts.initializer.key(),
            refunded,
            timestamp: super::unix_timestamp()?,
        });

        Ok(())
    }
}

use anchor_lang::prelude::*;

use crate::constants::SPLIT_VAULT_SEED;
use crate::states::SplitVault;

/// Anyone may trigger an allocation: it only credits member claims on funds
/// the vault already holds, it moves nothing out.
#[derive(Accounts)]
pub struct Allocate<'info> {
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [SPLIT_VAULT_SEED, split_vault.seed.as_bytes()],
        bump = split_vault.bump
    )]
    pub split_vault: Account<'info, SplitVault>,
}

impl<'info> Allocate<'info> {
    pub fn handle(ctx: Context<Allocate>) -> Result<()> {
        let vault_address = ctx.accounts.split_vault.key();
        let vault_info = ctx.accounts.split_vault.to_account_info();

        let reserve = rent_reserve(&vault_info)?;
        let increment = ctx
            .accounts
            .split_vault
            .available_funds(vault_info.lamports(), reserve)?;

        msg!(
            "Allocating {} lamports across {} members",
            increment,
            ctx.accounts.split_vault.members.len()
        );

        let (credited, remainder) = ctx.accounts.split_vault.allocate(increment)?;

        msg!("Credited {} lamports, {} left unallocated", credited, remainder);

        emit!(crate::events::FundsAllocated {
            vault: vault_address,
            deposit_increment: increment,
            credited,
            remainder,
            timestamp: super::unix_timestamp()?,
        });

        Ok(())
    }
}

/// Lamports the vault must retain to stay rent-exempt.
fn rent_reserve(account: &AccountInfo) -> Result<u64> {
    let rent = Rent::get()?;
    Ok(rent.minimum_balance(account.data_len()))
}

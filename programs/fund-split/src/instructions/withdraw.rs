use anchor_lang::prelude::*;

use crate::constants::SPLIT_VAULT_SEED;
use crate::errors::ErrorCode;
use crate::states::SplitVault;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// Signer fronting the withdrawal; must be the member itself when the
    /// vault was initialized with secure withdrawal
    pub payer: Signer<'info>,

    /// CHECK: Destination the member's funds are paid to. May be a wallet
    /// or another split vault; the program only credits lamports here and
    /// never reads the account's contents.
    #[account(mut)]
    pub member: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [SPLIT_VAULT_SEED, split_vault.seed.as_bytes()],
        bump = split_vault.bump
    )]
    pub split_vault: Account<'info, SplitVault>,
}

impl<'info> Withdraw<'info> {
    pub fn handle(ctx: Context<Withdraw>) -> Result<u64> {
        let member_address = ctx.accounts.member.key();
        let payer_address = ctx.accounts.payer.key();
        msg!("Processing withdrawal for member: {}", member_address);

        let now = super::unix_timestamp()?;
        let amount = ctx
            .accounts
            .split_vault
            .withdraw(&member_address, &payer_address, now)?;

        transfer_from_vault(&ctx, amount)?;

        msg!("Withdrew {} lamports to {}", amount, member_address);

        emit!(crate::events::FundsWithdrawn {
            vault: ctx.accounts.split_vault.key(),
            member: member_address,
            payer: payer_address,
            amount,
            timestamp: now,
        });

        Ok(amount)
    }
}

/// Moves settled lamports out of the vault. The vault account carries data,
/// so the system program refuses to debit it; the balances are adjusted
/// directly instead.
fn transfer_from_vault(ctx: &Context<Withdraw>, amount: u64) -> Result<()> {
    let vault_info = ctx.accounts.split_vault.to_account_info();
    let member_info = ctx.accounts.member.to_account_info();

    let debited = vault_info
        .lamports()
        .checked_sub(amount)
        .ok_or(ErrorCode::InsufficientAccountBalance)?;
    **vault_info.try_borrow_mut_lamports()? = debited;

    let credited = member_info
        .lamports()
        .checked_add(amount)
        .ok_or(ErrorCode::NumericalOverflowError)?;
    **member_info.try_borrow_mut_lamports()? = credited;

    Ok(())
}

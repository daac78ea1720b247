use anchor_lang::prelude::*;

use crate::constants::SPLIT_VAULT_SEED;
use crate::states::{Member, SplitVault};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeParams {
    /// Identifier the vault address is derived from
    pub seed: String,
    /// When true, members may only withdraw for themselves
    pub secure_withdrawal: bool,
    /// Member registry; shares must sum to exactly 100. Input amounts are
    /// ignored and stored as zero.
    pub members: Vec<Member>,
}

#[derive(Accounts)]
#[instruction(params: InitializeParams)]
pub struct Initialize<'info> {
    /// Creating authority; pays for the vault record and is the only
    /// identity allowed to close it later
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = SplitVault::space(&params.seed, params.members.len()),
        seeds = [SPLIT_VAULT_SEED, params.seed.as_bytes()],
        bump
    )]
    pub split_vault: Account<'info, SplitVault>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn handle(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        msg!("Initializing split vault with seed: {}", params.seed);
        msg!("Members: {}", params.members.len());
        msg!("Secure withdrawal: {}", params.secure_withdrawal);

        let now = super::unix_timestamp()?;
        let vault_address = ctx.accounts.split_vault.key();
        let initializer = ctx.accounts.payer.key();

        let vault = SplitVault::try_new(
            vault_address,
            ctx.bumps.split_vault,
            params.seed.clone(),
            params.secure_withdrawal,
            initializer,
            &params.members,
            now,
        )?;
        ctx.accounts.split_vault.set_inner(vault);

        msg!("Split vault initialized at {}", vault_address);

        emit!(crate::events::SplitVaultInitialized {
            vault: vault_address,
            initializer,
            seed: params.seed,
            secure_withdrawal: params.secure_withdrawal,
            member_count: params.members.len() as u32,
            timestamp: now,
        });

        Ok(())
    }
}

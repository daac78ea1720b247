use anchor_lang::prelude::*;

declare_id!("4qaN4nefwW3QFKJvr4QgzAnqbntkM4WMc6nYzx8Nez9S");

pub mod instructions;
pub mod errors;
pub mod constants;
pub mod states;
pub mod events;
pub mod math;

pub use instructions::*;
pub use events::*;

#[program]
pub mod fund_split {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, params: InitializeParams) -> Result<()> {
        Initialize::handle(ctx, params)
    }

    pub fn allocate(ctx: Context<Allocate>) -> Result<()> {
        Allocate::handle(ctx)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<u64> {
        Withdraw::handle(ctx)
    }

    pub fn close(ctx: Context<Close>) -> Result<()> {
        Close::handle(ctx)
    }
}

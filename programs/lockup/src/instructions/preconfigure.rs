use anchor_lang::prelude::*;

use crate::events::Preconfigured;
use crate::state::*;

#[derive(Accounts)]
pub struct Preconfigure<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

pub fn handler(ctx: Context<Preconfigure>, period: u64, deadline: u64) -> Result<()> {
    let escrow = &mut ctx.accounts.escrow;
    escrow.preconfigure(&ctx.accounts.creator.key(), period, deadline)?;

    emit!(Preconfigured {
        escrow: escrow.key(),
        period,
        deadline,
    });

    Ok(())
}

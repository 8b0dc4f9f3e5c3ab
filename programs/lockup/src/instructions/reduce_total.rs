use anchor_lang::prelude::*;

use crate::events::TotalReduced;
use crate::state::*;

#[derive(Accounts)]
pub struct ReduceTotal<'info> {
    pub funder: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

pub fn handler(ctx: Context<ReduceTotal>, adjustment: u64) -> Result<()> {
    let escrow = &mut ctx.accounts.escrow;
    escrow.reduce_total(&ctx.accounts.funder.key(), adjustment)?;

    emit!(TotalReduced {
        escrow: escrow.key(),
        adjustment,
        total: escrow.total,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::events::TotalSet;
use crate::state::*;

#[derive(Accounts)]
pub struct SetTotal<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

pub fn handler(ctx: Context<SetTotal>, total: u64) -> Result<()> {
    let escrow = &mut ctx.accounts.escrow;
    escrow.set_total(&ctx.accounts.creator.key(), total)?;

    emit!(TotalSet {
        escrow: escrow.key(),
        total,
    });

    Ok(())
}

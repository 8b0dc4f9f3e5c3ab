use anchor_lang::prelude::*;

use crate::events::PeriodConfigured;
use crate::helpers::current_timestamp;
use crate::state::*;

#[derive(Accounts)]
pub struct Configure<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

pub fn handler(ctx: Context<Configure>, period: u64) -> Result<()> {
    let now = current_timestamp()?;
    let escrow = &mut ctx.accounts.escrow;
    escrow.configure(&ctx.accounts.owner.key(), period, now)?;

    emit!(PeriodConfigured {
        escrow: escrow.key(),
        period,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::events::FundingSet;
use crate::helpers::current_timestamp;
use crate::state::*;

#[derive(Accounts)]
pub struct SetFunding<'info> {
    pub funder: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

pub fn handler(ctx: Context<SetFunding>, funding: u64) -> Result<()> {
    let now = current_timestamp()?;
    let escrow = &mut ctx.accounts.escrow;
    escrow.set_funding(&ctx.accounts.funder.key(), funding, now)?;

    emit!(FundingSet {
        escrow: escrow.key(),
        funding,
        fully_vested_at: escrow.fully_vested_at(),
    });

    Ok(())
}

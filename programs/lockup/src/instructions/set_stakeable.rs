use anchor_lang::prelude::*;

use crate::events::StakeableSet;
use crate::state::*;

#[derive(Accounts)]
pub struct SetStakeable<'info> {
    /// Owner, or creator while no owner is assigned.
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

pub fn handler(ctx: Context<SetStakeable>, stakeable: bool) -> Result<()> {
    let escrow = &mut ctx.accounts.escrow;
    escrow.set_stakeable(&ctx.accounts.signer.key(), stakeable)?;

    emit!(StakeableSet {
        escrow: escrow.key(),
        stakeable,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::events::UpdateApproved;
use crate::state::*;

#[derive(Accounts)]
pub struct ApproveUpdate<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

pub fn handler(ctx: Context<ApproveUpdate>, approval: bool) -> Result<()> {
    let escrow = &mut ctx.accounts.escrow;
    escrow.approve_update(&ctx.accounts.owner.key(), approval)?;

    emit!(UpdateApproved {
        escrow: escrow.key(),
        approval,
    });

    Ok(())
}

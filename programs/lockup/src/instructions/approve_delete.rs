use anchor_lang::prelude::*;

use crate::events::DeleteApproved;
use crate::state::*;

#[derive(Accounts)]
pub struct ApproveDelete<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

pub fn handler(ctx: Context<ApproveDelete>, approval: bool) -> Result<()> {
    let escrow = &mut ctx.accounts.escrow;
    escrow.approve_delete(&ctx.accounts.owner.key(), approval)?;

    emit!(DeleteApproved {
        escrow: escrow.key(),
        approval,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::events::DelegateSet;
use crate::state::*;

#[derive(Accounts)]
pub struct SetDelegate<'info> {
    /// Owner, or creator while no owner is assigned.
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

pub fn handler(ctx: Context<SetDelegate>, delegate: Pubkey) -> Result<()> {
    let escrow = &mut ctx.accounts.escrow;
    escrow.set_delegate(&ctx.accounts.signer.key(), delegate)?;

    emit!(DelegateSet {
        escrow: escrow.key(),
        delegate,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::events::FunderGranted;
use crate::state::*;

#[derive(Accounts)]
pub struct GrantFunder<'info> {
    pub funder: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

pub fn handler(ctx: Context<GrantFunder>, new_funder: Pubkey) -> Result<()> {
    let previous_funder = ctx.accounts.funder.key();
    let escrow = &mut ctx.accounts.escrow;
    escrow.grant_funder(&previous_funder, new_funder)?;

    emit!(FunderGranted {
        escrow: escrow.key(),
        previous_funder,
        new_funder,
    });

    Ok(())
}

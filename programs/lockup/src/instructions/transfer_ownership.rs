use anchor_lang::prelude::*;

use crate::events::OwnershipTransferred;
use crate::state::*;

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

pub fn handler(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let previous_owner = ctx.accounts.owner.key();
    let escrow = &mut ctx.accounts.escrow;
    escrow.transfer_ownership(&previous_owner, new_owner)?;

    emit!(OwnershipTransferred {
        escrow: escrow.key(),
        previous_owner,
        new_owner,
    });

    Ok(())
}

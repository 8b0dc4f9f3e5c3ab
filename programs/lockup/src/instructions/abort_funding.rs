use anchor_lang::prelude::*;

use crate::error::LockupError;
use crate::events::FundingAborted;
use crate::helpers::emit_deregistration;
use crate::state::*;

#[derive(Accounts)]
pub struct AbortFunding<'info> {
    /// Owner or funder.
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
        close = owner,
    )]
    pub escrow: Account<'info, EscrowAccount>,

    /// CHECK: Receives the remaining balance; must be the escrow owner.
    #[account(mut, address = escrow.owner @ LockupError::OwnerMismatch)]
    pub owner: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<AbortFunding>) -> Result<()> {
    let escrow = &mut ctx.accounts.escrow;
    let escrow_key = escrow.key();
    let registered = escrow.abort_funding(&ctx.accounts.signer.key())?;
    emit_deregistration(escrow_key, registered);

    // The close constraint moves every lamport, reserve included.
    let refunded_amount = escrow.to_account_info().lamports();
    msg!("abort_funding: refunding {} lamports to owner", refunded_amount);

    emit!(FundingAborted {
        escrow: escrow_key,
        owner: escrow.owner,
        refunded_amount,
    });

    Ok(())
}

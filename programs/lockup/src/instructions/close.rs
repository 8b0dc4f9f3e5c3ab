use anchor_lang::prelude::*;

use crate::error::LockupError;
use crate::events::EscrowClosed;
use crate::helpers::{current_timestamp, emit_deregistration};
use crate::state::*;

#[derive(Accounts)]
pub struct Close<'info> {
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

pub fn handler(ctx: Context<Close>) -> Result<()> {
    let now = current_timestamp()?;
    let escrow_key = ctx.accounts.escrow.key();
    let amount = ctx.accounts.escrow.to_account_info().lamports();

    // Explicit target: `Account` has its own `close`.
    let record: &mut EscrowAccount = &mut ctx.accounts.escrow;
    let registered = record.close(&ctx.accounts.signer.key(), now)?;
    emit_deregistration(escrow_key, registered);

    msg!("close: releasing {} lamports to owner", amount);

    // Emit event BEFORE account is closed
    emit!(EscrowClosed {
        escrow: escrow_key,
        owner: ctx.accounts.owner.key(),
        amount,
    });

    Ok(())
}

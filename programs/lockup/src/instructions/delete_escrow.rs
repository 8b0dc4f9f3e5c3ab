use anchor_lang::prelude::*;

use crate::error::LockupError;
use crate::events::EscrowDeleted;
use crate::helpers::emit_deregistration;
use crate::state::*;

#[derive(Accounts)]
pub struct DeleteEscrow<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
        close = recipient,
    )]
    pub escrow: Account<'info, EscrowAccount>,

    /// CHECK: The owner, or the creator while no owner is assigned.
    #[account(mut, address = escrow.deletion_recipient() @ LockupError::OwnerMismatch)]
    pub recipient: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<DeleteEscrow>) -> Result<()> {
    let escrow = &mut ctx.accounts.escrow;
    let escrow_key = escrow.key();
    let (recipient, registered) = escrow.delete(&ctx.accounts.creator.key())?;
    emit_deregistration(escrow_key, registered);

    let amount = escrow.to_account_info().lamports();
    msg!("delete_escrow: releasing {} lamports", amount);

    emit!(EscrowDeleted {
        escrow: escrow_key,
        recipient,
        amount,
    });

    Ok(())
}

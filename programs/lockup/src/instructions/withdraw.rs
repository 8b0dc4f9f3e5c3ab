use anchor_lang::prelude::*;

use crate::events::Withdrawn;
use crate::helpers::{current_timestamp, escrow_available_balance, transfer_lamports};
use crate::state::*;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

/// Returns the floor that remains locked after the withdrawal.
pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<u64> {
    let now = current_timestamp()?;
    let escrow_info = ctx.accounts.escrow.to_account_info();
    let available = escrow_available_balance(&escrow_info, &Rent::get()?)?;

    let floor = ctx
        .accounts
        .escrow
        .withdraw(&ctx.accounts.owner.key(), amount, available, now)?;

    transfer_lamports(&escrow_info, &ctx.accounts.owner.to_account_info(), amount)?;
    msg!("withdraw: {} lamports, floor {}", amount, floor);

    emit!(Withdrawn {
        escrow: *escrow_info.key,
        owner: ctx.accounts.owner.key(),
        amount,
        floor,
    });

    Ok(floor)
}

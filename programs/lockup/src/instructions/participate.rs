use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as instructions_sysvar;

use crate::error::LockupError;
use crate::events::ParticipationRegistered;
use crate::helpers::{current_timestamp, escrow_available_balance, transfer_lamports};
use crate::payment::InstructionsSysvarGroup;
use crate::state::*;

#[derive(Accounts)]
pub struct Participate<'info> {
    /// Owner or delegate; pays the fee through the companion transfer.
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
        constraint = escrow.parent == factory.key() @ LockupError::ParentMismatch,
    )]
    pub escrow: Account<'info, EscrowAccount>,

    #[account(
        seeds = [FACTORY_SEED],
        bump = factory.bump,
    )]
    pub factory: Account<'info, Factory>,

    /// CHECK: Fee destination, checked against the factory.
    #[account(mut, address = factory.fee_collector @ LockupError::FeeCollectorMismatch)]
    pub fee_collector: UncheckedAccount<'info>,

    /// CHECK: Instructions sysvar, checked by address.
    #[account(address = instructions_sysvar::ID)]
    pub instructions: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<Participate>, key: ParticipationKey) -> Result<()> {
    let instructions = ctx.accounts.instructions.to_account_info();
    let group = InstructionsSysvarGroup::new(&instructions);
    let fee = ctx.accounts.factory.participation_fee;
    let now = current_timestamp()?;

    let escrow_info = ctx.accounts.escrow.to_account_info();
    let escrow_key = *escrow_info.key;
    let available = escrow_available_balance(&escrow_info, &Rent::get()?)?;
    ctx.accounts.escrow.participate(
        &ctx.accounts.signer.key(),
        &escrow_key,
        &group,
        fee,
        key,
        available,
        now,
    )?;

    // The fee arrived with the companion transfer; pass it on untouched.
    transfer_lamports(&escrow_info, &ctx.accounts.fee_collector.to_account_info(), fee)?;
    msg!("participate: forwarded {} lamport fee", fee);

    emit!(ParticipationRegistered {
        escrow: escrow_key,
        key,
        fee,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions as instructions_sysvar;

use crate::events::Filled;
use crate::payment::InstructionsSysvarGroup;
use crate::state::*;

#[derive(Accounts)]
pub struct Fill<'info> {
    pub funder: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,

    /// CHECK: Instructions sysvar, checked by address.
    #[account(address = instructions_sysvar::ID)]
    pub instructions: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<Fill>) -> Result<()> {
    let instructions = ctx.accounts.instructions.to_account_info();
    let group = InstructionsSysvarGroup::new(&instructions);

    let escrow = &mut ctx.accounts.escrow;
    let escrow_key = escrow.key();
    let amount = escrow.fill(&ctx.accounts.funder.key(), &escrow_key, &group)?;

    emit!(Filled {
        escrow: escrow_key,
        amount,
        total: escrow.total,
    });

    Ok(())
}

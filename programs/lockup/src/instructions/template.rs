use anchor_lang::prelude::*;

use crate::events::Templated;
use crate::state::*;

#[derive(Accounts)]
pub struct Template<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

pub fn handler(ctx: Context<Template>, terms: VestingTerms) -> Result<()> {
    let escrow = &mut ctx.accounts.escrow;
    escrow.template(&ctx.accounts.creator.key(), terms)?;

    emit!(Templated {
        escrow: escrow.key(),
        terms,
    });

    Ok(())
}

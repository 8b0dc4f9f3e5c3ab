use anchor_lang::prelude::*;

use crate::events::VestingDelaySet;
use crate::state::*;

#[derive(Accounts)]
pub struct SetVestingDelay<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

pub fn handler(ctx: Context<SetVestingDelay>, vesting_delay: u64) -> Result<()> {
    let escrow = &mut ctx.accounts.escrow;
    escrow.set_vesting_delay(&ctx.accounts.creator.key(), vesting_delay)?;

    emit!(VestingDelaySet {
        escrow: escrow.key(),
        vesting_delay,
    });

    Ok(())
}

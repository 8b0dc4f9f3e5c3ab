use anchor_lang::prelude::*;

use crate::events::EscrowSetup;
use crate::state::*;

#[derive(Accounts)]
pub struct Setup<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

pub fn handler(
    ctx: Context<Setup>,
    deployer: Pubkey,
    owner: Pubkey,
    funder: Pubkey,
    initial: u64,
) -> Result<()> {
    let escrow = &mut ctx.accounts.escrow;
    escrow.setup(&ctx.accounts.creator.key(), deployer, owner, funder, initial)?;

    emit!(EscrowSetup {
        escrow: escrow.key(),
        deployer,
        owner,
        funder,
        initial,
    });

    Ok(())
}

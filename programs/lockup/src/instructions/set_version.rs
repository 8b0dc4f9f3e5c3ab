use anchor_lang::prelude::*;

use crate::events::VersionSet;
use crate::state::*;

#[derive(Accounts)]
pub struct SetVersion<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, escrow.creator.as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,
}

pub fn handler(
    ctx: Context<SetVersion>,
    contract_version: u64,
    deployment_version: u64,
) -> Result<()> {
    let escrow = &mut ctx.accounts.escrow;
    escrow.set_version(&ctx.accounts.creator.key(), contract_version, deployment_version)?;

    emit!(VersionSet {
        escrow: escrow.key(),
        contract_version,
        deployment_version,
    });

    Ok(())
}

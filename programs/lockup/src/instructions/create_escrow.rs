use anchor_lang::prelude::*;

use crate::events::EscrowCreated;
use crate::state::*;

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct CreateEscrow<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [FACTORY_SEED],
        bump = factory.bump,
    )]
    pub factory: Account<'info, Factory>,

    #[account(
        init,
        payer = creator,
        space = 8 + EscrowAccount::INIT_SPACE,
        seeds = [ESCROW_SEED, creator.key().as_ref(), seed.to_le_bytes().as_ref()],
        bump,
    )]
    pub escrow: Account<'info, EscrowAccount>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateEscrow>, seed: u64) -> Result<()> {
    let creator = ctx.accounts.creator.key();
    let parent = ctx.accounts.factory.key();

    let record = EscrowAccount::new(creator, parent, &ctx.accounts.factory, seed, ctx.bumps.escrow);
    ctx.accounts.escrow.set_inner(record);

    emit!(EscrowCreated {
        escrow: ctx.accounts.escrow.key(),
        creator,
        parent,
        seed,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::error::LockupError;
use crate::events::FactoryUpdated;
use crate::state::{Factory, FACTORY_SEED};

#[derive(Accounts)]
pub struct UpdateFactory<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [FACTORY_SEED],
        bump = factory.bump,
        constraint = factory.authority == authority.key() @ LockupError::NotAuthority,
    )]
    pub factory: Account<'info, Factory>,

    /// CHECK: New fee collector, validated by authority setting it.
    pub fee_collector: UncheckedAccount<'info>,
}

pub fn handler(
    ctx: Context<UpdateFactory>,
    new_authority: Option<Pubkey>,
    participation_fee: Option<u64>,
) -> Result<()> {
    let factory = &mut ctx.accounts.factory;

    if participation_fee.is_some() {
        factory.participation_fee = Factory::participation_fee_or_default(participation_fee)?;
    }

    let new_fee_collector = ctx.accounts.fee_collector.key();
    require!(new_fee_collector != Pubkey::default(), LockupError::InvalidFeeCollector);
    factory.fee_collector = new_fee_collector;

    if let Some(new_auth) = new_authority {
        require!(new_auth != Pubkey::default(), LockupError::InvalidAuthority);
        factory.authority = new_auth;
    }

    emit!(FactoryUpdated {
        authority: factory.authority,
        fee_collector: factory.fee_collector,
        participation_fee: factory.participation_fee,
    });

    Ok(())
}

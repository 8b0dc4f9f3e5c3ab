use anchor_lang::prelude::*;

use crate::error::LockupError;
use crate::events::FactoryInitialized;
use crate::state::{Factory, FACTORY_SEED};

#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + Factory::INIT_SPACE,
        seeds = [FACTORY_SEED],
        bump,
    )]
    pub factory: Account<'info, Factory>,

    /// CHECK: Receives participation fees; chosen by the authority.
    pub fee_collector: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<InitializeFactory>,
    participation_fee: Option<u64>,
    contract_version: u64,
    deployment_version: u64,
) -> Result<()> {
    let participation_fee = Factory::participation_fee_or_default(participation_fee)?;
    require!(
        ctx.accounts.fee_collector.key() != Pubkey::default(),
        LockupError::InvalidFeeCollector
    );

    let factory = &mut ctx.accounts.factory;
    factory.authority = ctx.accounts.authority.key();
    factory.fee_collector = ctx.accounts.fee_collector.key();
    factory.participation_fee = participation_fee;
    factory.contract_version = contract_version;
    factory.deployment_version = deployment_version;
    factory.bump = ctx.bumps.factory;

    emit!(FactoryInitialized {
        authority: factory.authority,
        fee_collector: factory.fee_collector,
        participation_fee,
        contract_version,
        deployment_version,
    });

    Ok(())
}

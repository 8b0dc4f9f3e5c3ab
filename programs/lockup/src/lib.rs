#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

declare_id!("61uiSTHgfNKhaUbvzDn8y1Ye1KDKuELctRiqRapiqxEt");

pub mod capabilities;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod payment;
pub mod schedule;
pub mod state;

#[cfg(test)]
mod test_utils;

use instructions::*;
use state::{ParticipationKey, VestingTerms};

#[program]
pub mod lockup {
    use super::*;

    pub fn initialize_factory(
        ctx: Context<InitializeFactory>,
        participation_fee: Option<u64>,
        contract_version: u64,
        deployment_version: u64,
    ) -> Result<()> {
        instructions::initialize_factory::handler(
            ctx,
            participation_fee,
            contract_version,
            deployment_version,
        )
    }

    pub fn update_factory(
        ctx: Context<UpdateFactory>,
        new_authority: Option<Pubkey>,
        participation_fee: Option<u64>,
    ) -> Result<()> {
        instructions::update_factory::handler(ctx, new_authority, participation_fee)
    }

    pub fn create_escrow(ctx: Context<CreateEscrow>, seed: u64) -> Result<()> {
        instructions::create_escrow::handler(ctx, seed)
    }

    pub fn template(ctx: Context<Template>, terms: VestingTerms) -> Result<()> {
        instructions::template::handler(ctx, terms)
    }

    pub fn preconfigure(ctx: Context<Preconfigure>, period: u64, deadline: u64) -> Result<()> {
        instructions::preconfigure::handler(ctx, period, deadline)
    }

    pub fn set_vesting_delay(ctx: Context<SetVestingDelay>, vesting_delay: u64) -> Result<()> {
        instructions::set_vesting_delay::handler(ctx, vesting_delay)
    }

    pub fn set_total(ctx: Context<SetTotal>, total: u64) -> Result<()> {
        instructions::set_total::handler(ctx, total)
    }

    pub fn setup(
        ctx: Context<Setup>,
        deployer: Pubkey,
        owner: Pubkey,
        funder: Pubkey,
        initial: u64,
    ) -> Result<()> {
        instructions::setup::handler(ctx, deployer, owner, funder, initial)
    }

    pub fn configure(ctx: Context<Configure>, period: u64) -> Result<()> {
        instructions::configure::handler(ctx, period)
    }

    pub fn fill(ctx: Context<Fill>) -> Result<()> {
        instructions::fill::handler(ctx)
    }

    pub fn set_funding(ctx: Context<SetFunding>, funding: u64) -> Result<()> {
        instructions::set_funding::handler(ctx, funding)
    }

    pub fn reduce_total(ctx: Context<ReduceTotal>, adjustment: u64) -> Result<()> {
        instructions::reduce_total::handler(ctx, adjustment)
    }

    pub fn abort_funding(ctx: Context<AbortFunding>) -> Result<()> {
        instructions::abort_funding::handler(ctx)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<u64> {
        instructions::withdraw::handler(ctx, amount)
    }

    pub fn close(ctx: Context<Close>) -> Result<()> {
        instructions::close::handler(ctx)
    }

    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::handler(ctx, new_owner)
    }

    pub fn grant_funder(ctx: Context<GrantFunder>, new_funder: Pubkey) -> Result<()> {
        instructions::grant_funder::handler(ctx, new_funder)
    }

    pub fn set_delegate(ctx: Context<SetDelegate>, delegate: Pubkey) -> Result<()> {
        instructions::set_delegate::handler(ctx, delegate)
    }

    pub fn participate(ctx: Context<Participate>, key: ParticipationKey) -> Result<()> {
        instructions::participate::handler(ctx, key)
    }

    pub fn set_stakeable(ctx: Context<SetStakeable>, stakeable: bool) -> Result<()> {
        instructions::set_stakeable::handler(ctx, stakeable)
    }

    pub fn approve_update(ctx: Context<ApproveUpdate>, approval: bool) -> Result<()> {
        instructions::approve_update::handler(ctx, approval)
    }

    pub fn approve_delete(ctx: Context<ApproveDelete>, approval: bool) -> Result<()> {
        instructions::approve_delete::handler(ctx, approval)
    }

    pub fn set_version(
        ctx: Context<SetVersion>,
        contract_version: u64,
        deployment_version: u64,
    ) -> Result<()> {
        instructions::set_version::handler(ctx, contract_version, deployment_version)
    }

    pub fn delete_escrow(ctx: Context<DeleteEscrow>) -> Result<()> {
        instructions::delete_escrow::handler(ctx)
    }
}

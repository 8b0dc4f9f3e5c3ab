use anchor_lang::prelude::*;

use crate::state::{ParticipationKey, VestingTerms};

#[event]
pub struct FactoryInitialized {
    pub authority: Pubkey,
    pub fee_collector: Pubkey,
    pub participation_fee: u64,
    pub contract_version: u64,
    pub deployment_version: u64,
}

#[event]
pub struct FactoryUpdated {
    pub authority: Pubkey,
    pub fee_collector: Pubkey,
    pub participation_fee: u64,
}

#[event]
pub struct EscrowCreated {
    pub escrow: Pubkey,
    pub creator: Pubkey,
    pub parent: Pubkey,
    pub seed: u64,
}

#[event]
pub struct Templated {
    pub escrow: Pubkey,
    pub terms: VestingTerms,
}

#[event]
pub struct Preconfigured {
    pub escrow: Pubkey,
    pub period: u64,
    pub deadline: u64,
}

#[event]
pub struct VestingDelaySet {
    pub escrow: Pubkey,
    pub vesting_delay: u64,
}

#[event]
pub struct TotalSet {
    pub escrow: Pubkey,
    pub total: u64,
}

#[event]
pub struct EscrowSetup {
    pub escrow: Pubkey,
    pub deployer: Pubkey,
    pub owner: Pubkey,
    pub funder: Pubkey,
    pub initial: u64,
}

#[event]
pub struct PeriodConfigured {
    pub escrow: Pubkey,
    pub period: u64,
}

#[event]
pub struct Filled {
    pub escrow: Pubkey,
    pub amount: u64,
    pub total: u64,
}

#[event]
pub struct FundingSet {
    pub escrow: Pubkey,
    pub funding: u64,
    pub fully_vested_at: u64,
}

#[event]
pub struct TotalReduced {
    pub escrow: Pubkey,
    pub adjustment: u64,
    pub total: u64,
}

#[event]
pub struct FundingAborted {
    pub escrow: Pubkey,
    pub owner: Pubkey,
    pub refunded_amount: u64,
}

#[event]
pub struct Withdrawn {
    pub escrow: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub floor: u64,
}

#[event]
pub struct EscrowClosed {
    pub escrow: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct OwnershipTransferred {
    pub escrow: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

#[event]
pub struct FunderGranted {
    pub escrow: Pubkey,
    pub previous_funder: Pubkey,
    pub new_funder: Pubkey,
}

#[event]
pub struct DelegateSet {
    pub escrow: Pubkey,
    pub delegate: Pubkey,
}

#[event]
pub struct ParticipationRegistered {
    pub escrow: Pubkey,
    pub key: ParticipationKey,
    pub fee: u64,
}

#[event]
pub struct ParticipationDeregistered {
    pub escrow: Pubkey,
    pub vote_key: [u8; 32],
}

#[event]
pub struct StakeableSet {
    pub escrow: Pubkey,
    pub stakeable: bool,
}

#[event]
pub struct UpdateApproved {
    pub escrow: Pubkey,
    pub approval: bool,
}

#[event]
pub struct DeleteApproved {
    pub escrow: Pubkey,
    pub approval: bool,
}

#[event]
pub struct VersionSet {
    pub escrow: Pubkey,
    pub contract_version: u64,
    pub deployment_version: u64,
}

#[event]
pub struct EscrowDeleted {
    pub escrow: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}

use anchor_lang::prelude::*;

use crate::error::LockupError;

pub const FACTORY_SEED: &[u8] = b"factory";
pub const ESCROW_SEED: &[u8] = b"escrow";
/// Companion-transfer amount `participate` requires when the factory is
/// initialised without an explicit fee.
pub const DEFAULT_PARTICIPATION_FEE: u64 = 5_000;

#[account]
#[derive(InitSpace)]
pub struct Factory {
    pub authority: Pubkey,
    pub fee_collector: Pubkey,
    pub participation_fee: u64,
    pub contract_version: u64,
    pub deployment_version: u64,
    pub bump: u8,
}

impl Factory {
    /// `requested`, or [`DEFAULT_PARTICIPATION_FEE`] when none is given.
    pub fn participation_fee_or_default(requested: Option<u64>) -> Result<u64> {
        let fee = requested.unwrap_or(DEFAULT_PARTICIPATION_FEE);
        require!(fee > 0, LockupError::InvalidParticipationFee);
        Ok(fee)
    }
}

/// Economic constants of one escrow. Written once by `template`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, InitSpace, PartialEq, Eq)]
pub struct VestingTerms {
    pub period_seconds: u64,
    pub lockup_delay: u64,
    pub vesting_delay: u64,
    pub period_limit: u64,
    pub distribution_count: u64,
    pub distribution_seconds: u64,
}

impl VestingTerms {
    /// True while no template has been applied.
    pub fn is_unset(&self) -> bool {
        *self == Self::default()
    }

    /// Rejects terms that would divide by zero in the schedule or leave
    /// the account re-templatable.
    pub fn validate(&self) -> Result<()> {
        require!(self.period_seconds > 0, LockupError::InvalidTemplate);
        require!(self.distribution_count > 0, LockupError::InvalidTemplate);
        require!(self.distribution_seconds > 0, LockupError::InvalidTemplate);
        Ok(())
    }
}

/// Consensus participation key material.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, InitSpace, PartialEq, Eq)]
pub struct ParticipationKey {
    pub vote_key: [u8; 32],
    pub selection_key: [u8; 32],
    pub vote_first: u64,
    pub vote_last: u64,
    pub vote_key_dilution: u64,
    pub state_proof_key: [u8; 64],
}

#[account]
#[derive(InitSpace)]
pub struct EscrowAccount {
    /// Signer of `create_escrow`; holds the creator-only operations.
    pub creator: Pubkey,
    /// Factory this account was deployed through.
    pub parent: Pubkey,
    pub owner: Pubkey,
    pub funder: Pubkey,
    pub delegate: Pubkey,
    pub deployer: Pubkey,
    pub period: u64,
    pub total: u64,
    /// Vesting clock start; zero until the funder sets it.
    pub funding: u64,
    pub initial: u64,
    pub deadline: u64,
    pub terms: VestingTerms,
    pub stakeable: bool,
    pub updatable: bool,
    pub deletable: bool,
    pub contract_version: u64,
    pub deployment_version: u64,
    pub participation: Option<ParticipationKey>,
    pub seed: u64,
    pub bump: u8,
}

use anchor_lang::prelude::*;

use crate::error::LockupError;
use crate::payment::{verify_incoming_transfer, TransferGroup};
use crate::state::{EscrowAccount, ParticipationKey};

impl EscrowAccount {
    /// Adds the funder's companion transfer to `total` and returns its amount.
    ///
    /// Accumulation stays open after `funding` is set.
    pub fn fill(
        &mut self,
        caller: &Pubkey,
        escrow: &Pubkey,
        group: &impl TransferGroup,
    ) -> Result<u64> {
        self.require_funder(caller)?;
        let amount = verify_incoming_transfer(group, &self.funder, escrow)?;
        require!(amount > 0, LockupError::ZeroPayment);
        self.total = self
            .total
            .checked_add(amount)
            .ok_or(LockupError::Overflow)?;
        Ok(amount)
    }

    /// Starts the vesting clock, or pushes a still-future start later.
    pub fn set_funding(&mut self, caller: &Pubkey, funding: u64, now: u64) -> Result<()> {
        self.require_funder(caller)?;
        require!(funding != 0, LockupError::InvalidTimestamp);
        if self.funding != 0 {
            require!(self.funding > now, LockupError::FundingNotExtendable);
            require_gte!(funding, self.funding, LockupError::FundingNotExtendable);
        }
        self.funding = funding;
        Ok(())
    }

    pub fn reduce_total(&mut self, caller: &Pubkey, adjustment: u64) -> Result<()> {
        self.require_funder(caller)?;
        require!(self.funding == 0, LockupError::FundingAlreadySet);
        self.total = self
            .total
            .checked_sub(adjustment)
            .ok_or(LockupError::AdjustmentExceedsTotal)?;
        Ok(())
    }

    /// Terminates an unfunded escrow. Returns the participation key that
    /// must be deregistered, if any.
    pub fn abort_funding(&mut self, caller: &Pubkey) -> Result<Option<ParticipationKey>> {
        self.require_owner_or_funder(caller)?;
        require!(self.funding == 0, LockupError::FundingAlreadySet);
        Ok(self.deregister())
    }

    pub fn grant_funder(&mut self, caller: &Pubkey, new_funder: Pubkey) -> Result<()> {
        self.require_funder(caller)?;
        require!(new_funder != Pubkey::default(), LockupError::InvalidIdentity);
        self.funder = new_funder;
        Ok(())
    }
}

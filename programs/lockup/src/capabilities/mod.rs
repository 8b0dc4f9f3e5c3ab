//! Guarded state transitions on [`EscrowAccount`].
//!
//! Each capability lives in its own module as an `impl EscrowAccount` block
//! and reads or writes the shared record only through these methods. Every
//! method either applies its whole effect or returns an error before
//! touching state. Callers pass `now` and the transaction group explicitly.

pub mod deployable;
pub mod fundable;
pub mod lockable;
pub mod ownable;
pub mod stakeable;
pub mod upgradeable;

use anchor_lang::prelude::*;

use crate::error::LockupError;
use crate::state::EscrowAccount;

impl EscrowAccount {
    pub fn require_creator(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.creator, LockupError::NotCreator);
        Ok(())
    }

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, LockupError::NotOwner);
        Ok(())
    }

    pub fn require_funder(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.funder, LockupError::NotFunder);
        Ok(())
    }

    pub fn require_owner_or_funder(&self, caller: &Pubkey) -> Result<()> {
        require!(
            *caller == self.owner || *caller == self.funder,
            LockupError::NotOwnerOrFunder
        );
        Ok(())
    }

    /// The owner, or the creator while no owner has been assigned.
    pub fn require_owner_or_unclaimed_creator(&self, caller: &Pubkey) -> Result<()> {
        if self.owner == Pubkey::default() {
            return self.require_creator(caller);
        }
        self.require_owner(caller)
    }

    /// Neither owner nor funder has been assigned yet.
    pub fn roles_unassigned(&self) -> bool {
        self.owner == Pubkey::default() && self.funder == Pubkey::default()
    }
}

use anchor_lang::prelude::*;

use crate::error::LockupError;
use crate::state::{EscrowAccount, ParticipationKey};

impl EscrowAccount {
    /// Bumps the recorded versions. Requires the owner's standing approval.
    pub fn set_version(
        &mut self,
        caller: &Pubkey,
        contract_version: u64,
        deployment_version: u64,
    ) -> Result<()> {
        self.require_creator(caller)?;
        require!(self.updatable, LockupError::NotUpdatable);
        self.contract_version = contract_version;
        self.deployment_version = deployment_version;
        Ok(())
    }

    pub fn approve_update(&mut self, caller: &Pubkey, approval: bool) -> Result<()> {
        self.require_owner(caller)?;
        self.updatable = approval;
        Ok(())
    }

    pub fn approve_delete(&mut self, caller: &Pubkey, approval: bool) -> Result<()> {
        self.require_owner(caller)?;
        self.deletable = approval;
        Ok(())
    }

    /// Checks that the creator may remove this unfunded account. Returns the
    /// address that receives the remaining lamports together with the
    /// participation key to deregister.
    pub fn delete(&mut self, caller: &Pubkey) -> Result<(Pubkey, Option<ParticipationKey>)> {
        self.require_creator(caller)?;
        require!(self.deletable, LockupError::NotDeletable);
        require!(self.funding == 0, LockupError::FundingAlreadySet);
        Ok((self.deletion_recipient(), self.deregister()))
    }

    /// The owner, or the creator while no owner has been assigned.
    pub fn deletion_recipient(&self) -> Pubkey {
        if self.owner == Pubkey::default() {
            self.creator
        } else {
            self.owner
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::capabilities::fixtures::{deployed, set_up, Roles};
    use crate::error::LockupError;
    use crate::test_utils::error_code;

    #[test]
    fn version_changes_follow_owner_approval() {
        let roles = Roles::new();
        let mut escrow = set_up(&roles);

        let err = escrow.set_version(&roles.owner, 2, 8).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotCreator));

        escrow.set_version(&roles.creator, 2, 8).unwrap();
        assert_eq!((escrow.contract_version, escrow.deployment_version), (2, 8));

        let err = escrow.approve_update(&roles.creator, false).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotOwner));
        escrow.approve_update(&roles.owner, false).unwrap();

        let err = escrow.set_version(&roles.creator, 3, 9).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotUpdatable));
        assert_eq!(escrow.contract_version, 2);
    }

    #[test]
    fn delete_pays_out_to_owner_once_assigned() {
        let roles = Roles::new();

        let mut escrow = deployed(&roles);
        let (recipient, key) = escrow.delete(&roles.creator).unwrap();
        assert_eq!(recipient, roles.creator);
        assert!(key.is_none());

        let mut escrow = set_up(&roles);
        let (recipient, _) = escrow.delete(&roles.creator).unwrap();
        assert_eq!(recipient, roles.owner);
    }

    #[test]
    fn delete_is_gated_by_approval_and_funding() {
        let roles = Roles::new();
        let mut escrow = set_up(&roles);

        let err = escrow.delete(&roles.owner).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotCreator));

        escrow.approve_delete(&roles.owner, false).unwrap();
        let err = escrow.delete(&roles.creator).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotDeletable));

        escrow.approve_delete(&roles.owner, true).unwrap();
        escrow.funding = 1;
        let err = escrow.delete(&roles.creator).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::FundingAlreadySet));
    }
}

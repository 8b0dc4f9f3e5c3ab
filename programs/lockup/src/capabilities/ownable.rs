use anchor_lang::prelude::*;

use crate::error::LockupError;
use crate::state::EscrowAccount;

impl EscrowAccount {
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<()> {
        self.require_owner(caller)?;
        require!(new_owner != Pubkey::default(), LockupError::InvalidIdentity);
        self.owner = new_owner;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;

    use crate::capabilities::fixtures::{set_up, Roles};
    use crate::error::LockupError;
    use crate::test_utils::error_code;

    #[test]
    fn ownership_moves_only_by_its_holder() {
        let roles = Roles::new();
        let mut escrow = set_up(&roles);
        let next = Pubkey::new_unique();

        let err = escrow.transfer_ownership(&roles.creator, next).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotOwner));

        let err = escrow.transfer_ownership(&roles.owner, Pubkey::default()).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::InvalidIdentity));

        escrow.transfer_ownership(&roles.owner, next).unwrap();
        assert_eq!(escrow.owner, next);

        let err = escrow.withdraw(&roles.owner, 0, 0, 0).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotOwner));
    }
}

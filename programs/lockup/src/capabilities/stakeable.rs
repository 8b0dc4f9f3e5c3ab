use anchor_lang::prelude::*;

use crate::error::LockupError;
use crate::payment::{verify_incoming_transfer, TransferGroup};
use crate::state::{EscrowAccount, ParticipationKey};

impl EscrowAccount {
    pub fn set_delegate(&mut self, caller: &Pubkey, delegate: Pubkey) -> Result<()> {
        self.require_owner_or_unclaimed_creator(caller)?;
        require!(self.stakeable, LockupError::NotStakeable);
        self.delegate = delegate;
        Ok(())
    }

    pub fn set_stakeable(&mut self, caller: &Pubkey, stakeable: bool) -> Result<()> {
        self.require_owner_or_unclaimed_creator(caller)?;
        self.stakeable = stakeable;
        Ok(())
    }

    /// Registers `key` for consensus participation.
    ///
    /// The caller must pay exactly `fee` into the escrow in the preceding
    /// transfer, so the registration can never be paid for out of the
    /// escrowed balance. `available` is the balance above the ledger reserve
    /// with that fee already credited; once the fee is forwarded the rest
    /// must still cover the withdrawal floor at `now`.
    #[allow(clippy::too_many_arguments)]
    pub fn participate(
        &mut self,
        caller: &Pubkey,
        escrow: &Pubkey,
        group: &impl TransferGroup,
        fee: u64,
        key: ParticipationKey,
        available: u64,
        now: u64,
    ) -> Result<()> {
        require!(
            *caller == self.owner
                || (self.delegate != Pubkey::default() && *caller == self.delegate),
            LockupError::NotOwnerOrDelegate
        );
        require!(self.stakeable, LockupError::NotStakeable);
        require_gte!(
            key.vote_last,
            key.vote_first,
            LockupError::InvalidValidityWindow
        );
        let paid = verify_incoming_transfer(group, caller, escrow)?;
        require_eq!(paid, fee, LockupError::PaymentAmountMismatch);
        let remaining = available
            .checked_sub(fee)
            .ok_or(LockupError::InsufficientBalance)?;
        require_gte!(
            remaining,
            self.withdrawal_floor(now),
            LockupError::BelowMinimumBalance
        );
        self.participation = Some(key);
        Ok(())
    }

    /// Clears the registered key and returns it.
    pub fn deregister(&mut self) -> Option<ParticipationKey> {
        self.participation.take()
    }
}

#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;

    use crate::capabilities::fixtures::{deployed, set_up, Roles};
    use crate::error::LockupError;
    use crate::payment::tests::MemoryGroup;
    use crate::state::{ParticipationKey, DEFAULT_PARTICIPATION_FEE};
    use crate::test_utils::error_code;

    /// Escrow holding nothing above its reserve but the fee just paid.
    const FEE_ONLY: u64 = DEFAULT_PARTICIPATION_FEE;

    fn key() -> ParticipationKey {
        ParticipationKey {
            vote_key: [1; 32],
            selection_key: [2; 32],
            vote_first: 10,
            vote_last: 1_000,
            vote_key_dilution: 31,
            state_proof_key: [3; 64],
        }
    }

    #[test]
    fn creator_assigns_delegate_until_owner_exists() {
        let roles = Roles::new();
        let mut escrow = deployed(&roles);
        escrow.set_delegate(&roles.creator, roles.delegate).unwrap();
        assert_eq!(escrow.delegate, roles.delegate);

        let mut escrow = set_up(&roles);
        let err = escrow.set_delegate(&roles.creator, roles.stranger).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotOwner));
        escrow.set_delegate(&roles.owner, roles.delegate).unwrap();
        assert_eq!(escrow.delegate, roles.delegate);
    }

    #[test]
    fn owner_and_delegate_participate_with_exact_fee() {
        let roles = Roles::new();
        let mut escrow = set_up(&roles);
        escrow.set_delegate(&roles.owner, roles.delegate).unwrap();

        for caller in [roles.owner, roles.delegate] {
            let group = MemoryGroup::paid(caller, roles.escrow, DEFAULT_PARTICIPATION_FEE);
            escrow
                .participate(&caller, &roles.escrow, &group, DEFAULT_PARTICIPATION_FEE, key(), FEE_ONLY, 0)
                .unwrap();
            assert_eq!(escrow.deregister(), Some(key()));
        }
        assert_eq!(escrow.deregister(), None);
    }

    #[test]
    fn participate_rejects_fee_mismatch_and_strangers() {
        let roles = Roles::new();
        let mut escrow = set_up(&roles);

        let group = MemoryGroup::paid(roles.owner, roles.escrow, DEFAULT_PARTICIPATION_FEE + 1);
        let err = escrow
            .participate(&roles.owner, &roles.escrow, &group, DEFAULT_PARTICIPATION_FEE, key(), FEE_ONLY, 0)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::PaymentAmountMismatch));

        let group = MemoryGroup::paid(roles.stranger, roles.escrow, DEFAULT_PARTICIPATION_FEE);
        let err = escrow
            .participate(&roles.stranger, &roles.escrow, &group, DEFAULT_PARTICIPATION_FEE, key(), FEE_ONLY, 0)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotOwnerOrDelegate));

        // The fee must come from the caller, not from a bystander.
        let group = MemoryGroup::paid(roles.funder, roles.escrow, DEFAULT_PARTICIPATION_FEE);
        let err = escrow
            .participate(&roles.owner, &roles.escrow, &group, DEFAULT_PARTICIPATION_FEE, key(), FEE_ONLY, 0)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::PaymentSenderMismatch));
        assert!(escrow.participation.is_none());
    }

    #[test]
    fn participate_rejects_inverted_window() {
        let roles = Roles::new();
        let mut escrow = set_up(&roles);
        let inverted = ParticipationKey { vote_first: 5, vote_last: 4, ..key() };
        let group = MemoryGroup::paid(roles.owner, roles.escrow, DEFAULT_PARTICIPATION_FEE);
        let err = escrow
            .participate(&roles.owner, &roles.escrow, &group, DEFAULT_PARTICIPATION_FEE, inverted, FEE_ONLY, 0)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::InvalidValidityWindow));
    }

    #[test]
    fn stakeable_flag_gates_participation() {
        let roles = Roles::new();
        let mut escrow = set_up(&roles);

        let err = escrow.set_stakeable(&roles.funder, false).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotOwner));
        escrow.set_stakeable(&roles.owner, false).unwrap();

        let group = MemoryGroup::paid(roles.owner, roles.escrow, DEFAULT_PARTICIPATION_FEE);
        let err = escrow
            .participate(&roles.owner, &roles.escrow, &group, DEFAULT_PARTICIPATION_FEE, key(), FEE_ONLY, 0)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotStakeable));

        let err = escrow.set_delegate(&roles.owner, Pubkey::new_unique()).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotStakeable));
    }

    #[test]
    fn nested_calls_cannot_reuse_one_fee() {
        let roles = Roles::new();
        let mut escrow = set_up(&roles);
        let group = MemoryGroup::paid(roles.owner, roles.escrow, DEFAULT_PARTICIPATION_FEE).nested();
        for _ in 0..3 {
            let err = escrow
                .participate(&roles.owner, &roles.escrow, &group, DEFAULT_PARTICIPATION_FEE, key(), FEE_ONLY, 0)
                .unwrap_err();
            assert_eq!(error_code(err), u32::from(LockupError::NestedInvocation));
        }
        assert!(escrow.participation.is_none());
    }

    #[test]
    fn forwarded_fee_never_eats_into_the_floor() {
        let roles = Roles::new();
        let mut escrow = set_up(&roles);
        escrow.total = 1_000;
        escrow.funding = 1;
        let group = MemoryGroup::paid(roles.owner, roles.escrow, DEFAULT_PARTICIPATION_FEE);

        // Locked: the whole total stays behind once the fee leaves.
        let short = 1_000 + DEFAULT_PARTICIPATION_FEE - 1;
        let err = escrow
            .participate(&roles.owner, &roles.escrow, &group, DEFAULT_PARTICIPATION_FEE, key(), short, 2)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::BelowMinimumBalance));

        let err = escrow
            .participate(&roles.owner, &roles.escrow, &group, DEFAULT_PARTICIPATION_FEE, key(), 0, 2)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::InsufficientBalance));

        escrow
            .participate(&roles.owner, &roles.escrow, &group, DEFAULT_PARTICIPATION_FEE, key(), short + 1, 2)
            .unwrap();
        assert_eq!(escrow.participation, Some(key()));
    }

    #[test]
    fn close_and_abort_hand_back_the_registered_key() {
        let roles = Roles::new();
        let mut escrow = set_up(&roles);
        let group = MemoryGroup::paid(roles.owner, roles.escrow, DEFAULT_PARTICIPATION_FEE);
        escrow
            .participate(&roles.owner, &roles.escrow, &group, DEFAULT_PARTICIPATION_FEE, key(), FEE_ONLY, 0)
            .unwrap();

        assert_eq!(escrow.abort_funding(&roles.funder).unwrap(), Some(key()));
        assert!(escrow.participation.is_none());
    }
}

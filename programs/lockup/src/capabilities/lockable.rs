use anchor_lang::prelude::*;

use crate::error::LockupError;
use crate::schedule;
use crate::state::{EscrowAccount, ParticipationKey, VestingTerms};

impl EscrowAccount {
    /// Freezes the economic constants. One-time: every term must still be zero.
    pub fn template(&mut self, caller: &Pubkey, terms: VestingTerms) -> Result<()> {
        self.require_creator(caller)?;
        require!(self.terms.is_unset(), LockupError::TemplateAlreadySet);
        terms.validate()?;
        self.terms = terms;
        Ok(())
    }

    pub fn preconfigure(&mut self, caller: &Pubkey, period: u64, deadline: u64) -> Result<()> {
        self.require_pre_setup(caller)?;
        require_gte!(
            self.terms.period_limit,
            period,
            LockupError::PeriodLimitExceeded
        );
        self.period = period;
        self.deadline = deadline;
        Ok(())
    }

    pub fn set_vesting_delay(&mut self, caller: &Pubkey, vesting_delay: u64) -> Result<()> {
        self.require_pre_setup(caller)?;
        self.terms.vesting_delay = vesting_delay;
        Ok(())
    }

    pub fn set_total(&mut self, caller: &Pubkey, total: u64) -> Result<()> {
        self.require_pre_setup(caller)?;
        self.total = total;
        Ok(())
    }

    /// Assigns owner and funder once and records the pre-vesting deposit.
    pub fn setup(
        &mut self,
        caller: &Pubkey,
        deployer: Pubkey,
        owner: Pubkey,
        funder: Pubkey,
        initial: u64,
    ) -> Result<()> {
        self.require_pre_setup(caller)?;
        require!(
            owner != Pubkey::default() && funder != Pubkey::default(),
            LockupError::InvalidIdentity
        );
        self.deployer = deployer;
        self.owner = owner;
        self.funder = funder;
        self.initial = initial;
        Ok(())
    }

    /// Owner picks the lockup period before anything is committed.
    pub fn configure(&mut self, caller: &Pubkey, period: u64, now: u64) -> Result<()> {
        self.require_owner(caller)?;
        require!(
            self.funding == 0 && self.total == 0,
            LockupError::AlreadyCommitted
        );
        require_gte!(
            self.terms.period_limit,
            period,
            LockupError::PeriodLimitExceeded
        );
        require!(now < self.deadline, LockupError::DeadlinePassed);
        self.period = period;
        Ok(())
    }

    /// Vesting floor at `now` for this account's terms.
    pub fn minimum_retained(&self, now: u64) -> u64 {
        schedule::minimum_retained(
            now,
            self.terms.vesting_delay,
            self.terms.period_seconds,
            self.terms.lockup_delay,
            self.period,
            self.funding,
            self.total,
            self.terms.distribution_count,
            self.terms.distribution_seconds,
        )
    }

    /// End of the hard lock for the current funding timestamp.
    pub fn fully_vested_at(&self) -> u64 {
        schedule::fully_vested_at(
            self.terms.vesting_delay,
            self.terms.period_seconds,
            self.terms.lockup_delay,
            self.period,
            self.funding,
        )
    }

    /// Before funding the whole committed total is retained.
    pub fn withdrawal_floor(&self, now: u64) -> u64 {
        if self.funding == 0 {
            self.total
        } else {
            self.minimum_retained(now)
        }
    }

    /// Checks that `amount` can leave the escrow and returns the floor.
    /// `available` is the balance above the ledger reserve.
    pub fn withdraw(&self, caller: &Pubkey, amount: u64, available: u64, now: u64) -> Result<u64> {
        self.require_owner(caller)?;
        let floor = self.withdrawal_floor(now);
        let remaining = available
            .checked_sub(amount)
            .ok_or(LockupError::InsufficientBalance)?;
        require_gte!(remaining, floor, LockupError::BelowMinimumBalance);
        Ok(floor)
    }

    /// Final close once fully vested. Returns the participation key that
    /// must be deregistered, if any.
    pub fn close(&mut self, caller: &Pubkey, now: u64) -> Result<Option<ParticipationKey>> {
        self.require_owner_or_funder(caller)?;
        require!(self.funding != 0, LockupError::NotFunded);
        require!(self.minimum_retained(now) == 0, LockupError::StillVesting);
        Ok(self.deregister())
    }

    /// Creator-only operations that are legal between `template` and `setup`.
    fn require_pre_setup(&self, caller: &Pubkey) -> Result<()> {
        self.require_creator(caller)?;
        require!(self.roles_unassigned(), LockupError::RolesAlreadyAssigned);
        require!(!self.terms.is_unset(), LockupError::TemplateNotSet);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;

    use crate::capabilities::fixtures::{deployed, set_up, terms, Roles, DEADLINE};
    use crate::error::LockupError;
    use crate::state::VestingTerms;
    use crate::test_utils::error_code;

    const MIN_RESERVE: u64 = 100_000;

    #[test]
    fn template_is_creator_only_and_one_time() {
        let roles = Roles::new();
        let mut escrow = deployed(&roles);

        let err = escrow.template(&roles.stranger, terms()).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotCreator));

        escrow.template(&roles.creator, terms()).unwrap();
        assert_eq!(escrow.terms, terms());

        let err = escrow.template(&roles.creator, terms()).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::TemplateAlreadySet));
    }

    #[test]
    fn template_rejects_zero_divisors() {
        let roles = Roles::new();
        let mut escrow = deployed(&roles);
        for broken in [
            VestingTerms { distribution_seconds: 0, ..terms() },
            VestingTerms { distribution_count: 0, ..terms() },
            VestingTerms { period_seconds: 0, ..terms() },
        ] {
            let err = escrow.template(&roles.creator, broken).unwrap_err();
            assert_eq!(error_code(err), u32::from(LockupError::InvalidTemplate));
        }
        assert!(escrow.terms.is_unset());
    }

    #[test]
    fn pre_setup_operations_need_a_template() {
        let roles = Roles::new();
        let mut escrow = deployed(&roles);
        let err = escrow.setup(&roles.creator, roles.deployer, roles.owner, roles.funder, 0).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::TemplateNotSet));
        let err = escrow.set_total(&roles.creator, 10).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::TemplateNotSet));
    }

    #[test]
    fn preconfigure_and_early_staking_adjustments() {
        let roles = Roles::new();
        let mut escrow = deployed(&roles);
        escrow.template(&roles.creator, terms()).unwrap();

        let err = escrow.preconfigure(&roles.creator, 6, DEADLINE).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::PeriodLimitExceeded));

        escrow.preconfigure(&roles.creator, 3, DEADLINE).unwrap();
        escrow.set_vesting_delay(&roles.creator, 2).unwrap();
        escrow.set_total(&roles.creator, 500).unwrap();
        assert_eq!((escrow.period, escrow.deadline), (3, DEADLINE));
        assert_eq!((escrow.terms.vesting_delay, escrow.total), (2, 500));

        let err = escrow.set_total(&roles.stranger, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotCreator));
    }

    #[test]
    fn setup_assigns_roles_once() {
        let roles = Roles::new();
        let mut escrow = set_up(&roles);
        assert_eq!(escrow.owner, roles.owner);
        assert_eq!(escrow.funder, roles.funder);
        assert_eq!(escrow.deployer, roles.deployer);

        let other = Pubkey::new_unique();
        let err = escrow.setup(&roles.creator, other, other, other, 5).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::RolesAlreadyAssigned));
        assert_eq!(escrow.owner, roles.owner);

        let err = escrow.set_vesting_delay(&roles.creator, 1).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::RolesAlreadyAssigned));
    }

    #[test]
    fn setup_rejects_unset_identities() {
        let roles = Roles::new();
        let mut escrow = deployed(&roles);
        escrow.template(&roles.creator, terms()).unwrap();
        let err = escrow
            .setup(&roles.creator, roles.deployer, Pubkey::default(), roles.funder, 0)
            .unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::InvalidIdentity));
    }

    #[test]
    fn configure_guards() {
        let roles = Roles::new();
        let mut escrow = set_up(&roles);

        let err = escrow.configure(&roles.funder, 2, 0).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotOwner));

        let err = escrow.configure(&roles.owner, 6, 0).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::PeriodLimitExceeded));

        let err = escrow.configure(&roles.owner, 2, DEADLINE).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::DeadlinePassed));

        escrow.configure(&roles.owner, 5, DEADLINE - 1).unwrap();
        assert_eq!(escrow.period, 5);

        escrow.total = 1;
        let err = escrow.configure(&roles.owner, 2, 0).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::AlreadyCommitted));
    }

    #[test]
    fn withdraw_before_funding_keeps_total() {
        let roles = Roles::new();
        let escrow = set_up(&roles);

        // Nothing committed, nothing available.
        assert_eq!(escrow.withdraw(&roles.owner, 0, 0, 0).unwrap(), 0);

        let mut escrow = escrow;
        escrow.total = MIN_RESERVE;
        // Balance of two reserves: one is the ledger reserve, one is committed.
        assert_eq!(escrow.withdraw(&roles.owner, 0, MIN_RESERVE, 0).unwrap(), MIN_RESERVE);
        let err = escrow.withdraw(&roles.owner, 1, MIN_RESERVE, 0).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::BelowMinimumBalance));
    }

    #[test]
    fn withdraw_from_three_reserves_unfunded() {
        let roles = Roles::new();
        let escrow = set_up(&roles);
        // Balance 3 x reserve, ledger keeps one, floor is zero.
        let available = 2 * MIN_RESERVE;
        assert_eq!(escrow.withdraw(&roles.owner, MIN_RESERVE, available, 0).unwrap(), 0);
    }

    #[test]
    fn withdraw_never_dips_below_floor() {
        let roles = Roles::new();
        let mut escrow = set_up(&roles);
        escrow.total = 50;

        // amount = 0 still fails when the available balance is under the floor.
        let err = escrow.withdraw(&roles.owner, 0, 49, 0).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::BelowMinimumBalance));

        let err = escrow.withdraw(&roles.owner, 60, 50, 0).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::InsufficientBalance));

        let err = escrow.withdraw(&roles.funder, 0, 100, 0).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotOwner));
    }

    #[test]
    fn withdraw_after_funding_follows_schedule() {
        let roles = Roles::new();
        let mut escrow = set_up(&roles);
        escrow.total = 9 * MIN_RESERVE;
        escrow.funding = 1;

        // Still inside the hard lock at t = 1.
        assert_eq!(
            escrow.withdraw(&roles.owner, 0, 9 * MIN_RESERVE, 1).unwrap(),
            9 * MIN_RESERVE
        );

        // period = 0: lock ends at funding + vesting_delay * period_seconds.
        let boundary = escrow.fully_vested_at();
        assert_eq!(boundary, 1 + 12 * 60);
        let after_six = boundary + 6 * 60;
        let floor = escrow.minimum_retained(after_six);
        assert_eq!(floor, 9 * MIN_RESERVE / 2);
        assert_eq!(
            escrow
                .withdraw(&roles.owner, 9 * MIN_RESERVE - floor, 9 * MIN_RESERVE, after_six)
                .unwrap(),
            floor
        );
    }

    #[test]
    fn close_requires_full_vesting() {
        let roles = Roles::new();
        let mut escrow = set_up(&roles);
        escrow.total = 99_990;

        let err = escrow.close(&roles.owner, 10).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotFunded));

        escrow.funding = 1;
        let err = escrow.close(&roles.owner, 10).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::StillVesting));

        let done = escrow.fully_vested_at() + 12 * 60;
        let err = escrow.close(&roles.stranger, done).unwrap_err();
        assert_eq!(error_code(err), u32::from(LockupError::NotOwnerOrFunder));

        assert_eq!(escrow.close(&roles.funder, done).unwrap(), None);
        assert!(escrow.close(&roles.owner, done).is_ok());
    }
}

use anchor_lang::prelude::*;

use crate::state::{EscrowAccount, Factory, VestingTerms};

impl EscrowAccount {
    /// Record of an escrow just deployed through `parent`. Every role and
    /// amount is unset and every capability flag starts enabled.
    pub fn new(creator: Pubkey, parent: Pubkey, factory: &Factory, seed: u64, bump: u8) -> Self {
        Self {
            creator,
            parent,
            owner: Pubkey::default(),
            funder: Pubkey::default(),
            delegate: Pubkey::default(),
            deployer: Pubkey::default(),
            period: 0,
            total: 0,
            funding: 0,
            initial: 0,
            deadline: 0,
            terms: VestingTerms::default(),
            stakeable: true,
            updatable: true,
            deletable: true,
            contract_version: factory.contract_version,
            deployment_version: factory.deployment_version,
            participation: None,
            seed,
            bump,
        }
    }
}

//! Companion-transfer verification.
//!
//! A paid operation must be preceded, in the same transaction, by a plain
//! lamport transfer from the expected payer to the escrow. The paid
//! instruction itself must be a top-level instruction of this program: a
//! cross-program invocation sees the outer instruction's index and could
//! replay one transfer any number of times. The transaction is reached through [`TransferGroup`] so the check can run against the
//! instructions sysvar on-chain and against an in-memory group in tests.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked,
};

use crate::error::LockupError;

/// System program instruction tag for `Transfer`.
const SYSTEM_TRANSFER_TAG: u32 = 2;
const SYSTEM_TRANSFER_LEN: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompanionTransfer {
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
}

/// Read access to the instructions of the enclosing transaction.
pub trait TransferGroup {
    /// Position of the executing top-level instruction.
    fn current_index(&self) -> Result<usize>;

    /// True when the top-level instruction at `current_index` is this
    /// program's own, i.e. the call did not arrive through another program.
    fn invoked_directly(&self) -> Result<bool>;

    /// Decodes the instruction at `index` as a lamport transfer.
    fn transfer_at(&self, index: usize) -> Result<CompanionTransfer>;
}

/// Verifies the transfer immediately preceding the current instruction and
/// returns its amount.
pub fn verify_incoming_transfer(
    group: &impl TransferGroup,
    expected_sender: &Pubkey,
    receiver: &Pubkey,
) -> Result<u64> {
    require!(group.invoked_directly()?, LockupError::NestedInvocation);
    let index = group.current_index()?;
    require!(index > 0, LockupError::MissingCompanionTransfer);

    let transfer = group.transfer_at(index - 1)?;
    require_keys_eq!(
        transfer.sender,
        *expected_sender,
        LockupError::PaymentSenderMismatch
    );
    require_keys_eq!(
        transfer.receiver,
        *receiver,
        LockupError::PaymentReceiverMismatch
    );
    Ok(transfer.amount)
}

/// Spendable lamports above the ledger's per-account reserve.
pub fn available_balance(lamports: u64, reserve_minimum: u64) -> Result<u64> {
    lamports
        .checked_sub(reserve_minimum)
        .ok_or_else(|| error!(LockupError::InsufficientBalance))
}

/// [`TransferGroup`] over the instructions sysvar.
pub struct InstructionsSysvarGroup<'a, 'info> {
    instructions: &'a AccountInfo<'info>,
}

impl<'a, 'info> InstructionsSysvarGroup<'a, 'info> {
    pub fn new(instructions: &'a AccountInfo<'info>) -> Self {
        Self { instructions }
    }
}

impl TransferGroup for InstructionsSysvarGroup<'_, '_> {
    fn current_index(&self) -> Result<usize> {
        Ok(load_current_index_checked(self.instructions)? as usize)
    }

    fn invoked_directly(&self) -> Result<bool> {
        let index = self.current_index()?;
        let ix = load_instruction_at_checked(index, self.instructions)?;
        Ok(ix.program_id == crate::ID)
    }

    fn transfer_at(&self, index: usize) -> Result<CompanionTransfer> {
        let ix = load_instruction_at_checked(index, self.instructions)
            .map_err(|_| error!(LockupError::MissingCompanionTransfer))?;
        require_keys_eq!(
            ix.program_id,
            anchor_lang::system_program::ID,
            LockupError::NotATransfer
        );
        require!(ix.accounts.len() >= 2, LockupError::NotATransfer);
        let amount = decode_system_transfer(&ix.data).ok_or(LockupError::NotATransfer)?;
        Ok(CompanionTransfer {
            sender: ix.accounts[0].pubkey,
            receiver: ix.accounts[1].pubkey,
            amount,
        })
    }
}

/// Parses a system `Transfer { lamports }` payload.
fn decode_system_transfer(data: &[u8]) -> Option<u64> {
    if data.len() != SYSTEM_TRANSFER_LEN {
        return None;
    }
    let (tag, lamports) = data.split_at(4);
    let tag = u32::from_le_bytes(tag.try_into().ok()?);
    if tag != SYSTEM_TRANSFER_TAG {
        return None;
    }
    Some(u64::from_le_bytes(lamports.try_into().ok()?))
}

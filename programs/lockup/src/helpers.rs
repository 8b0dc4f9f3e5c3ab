use anchor_lang::prelude::*;

use crate::error::LockupError;
use crate::events::ParticipationDeregistered;
use crate::payment::available_balance;
use crate::state::ParticipationKey;

/// Current ledger time in whole seconds. Sampled once per instruction.
pub fn current_timestamp() -> Result<u64> {
    let clock = Clock::get()?;
    u64::try_from(clock.unix_timestamp).map_err(|_| error!(LockupError::InvalidTimestamp))
}

/// Move lamports out of a program-owned account. Skips if amount == 0.
pub fn transfer_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    let debited = from
        .lamports()
        .checked_sub(amount)
        .ok_or(LockupError::InsufficientBalance)?;
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(LockupError::Overflow)?;
    **from.try_borrow_mut_lamports()? = debited;
    **to.try_borrow_mut_lamports()? = credited;
    Ok(())
}

/// Escrow lamports above its rent-exempt minimum under `rent`.
pub fn escrow_available_balance(escrow: &AccountInfo, rent: &Rent) -> Result<u64> {
    let reserve_minimum = rent.minimum_balance(escrow.data_len());
    available_balance(escrow.lamports(), reserve_minimum)
}

/// Publishes the deregistration of a key that was cleared from `escrow`.
pub fn emit_deregistration(escrow: Pubkey, key: Option<ParticipationKey>) {
    if let Some(key) = key {
        emit!(ParticipationDeregistered {
            escrow,
            vote_key: key.vote_key,
        });
    }
}

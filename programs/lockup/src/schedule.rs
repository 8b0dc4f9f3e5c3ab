//! Minimum retained balance of a vesting escrow.
//!
//! The schedule has two phases. Until `funding + vesting + lockup` the whole
//! committed total is locked. After that boundary the floor steps down by
//! `total / distribution_count` once per elapsed `distribution_seconds`, and
//! reaches zero after `distribution_count` installments.
//!
//! Every input is an unsigned integer and every division floors, so two
//! evaluations with the same inputs agree bit for bit.

/// Returns the balance that must stay in escrow at `now`.
///
/// Total over all inputs: products saturate in `u128`, and a zero
/// distribution count or interval releases everything once unlocked.
/// `template` rejects both zero values, so that branch only guards totality.
#[allow(clippy::too_many_arguments)]
pub fn minimum_retained(
    now: u64,
    vesting_delay: u64,
    period_seconds: u64,
    lockup_delay: u64,
    period: u64,
    funding: u64,
    total: u64,
    distribution_count: u64,
    distribution_seconds: u64,
) -> u64 {
    let lockup_seconds = (lockup_delay as u128)
        .saturating_mul(period as u128)
        .saturating_mul(period_seconds as u128);
    let vesting_seconds = (vesting_delay as u128).saturating_mul(period_seconds as u128);
    let fully_vested_at = (funding as u128)
        .saturating_add(vesting_seconds)
        .saturating_add(lockup_seconds);

    let now = now as u128;
    if now <= fully_vested_at {
        return total;
    }

    if distribution_count == 0 || distribution_seconds == 0 {
        return 0;
    }

    let elapsed_periods = (now - fully_vested_at) / distribution_seconds as u128;
    let count = distribution_count as u128;
    if elapsed_periods > count {
        return 0;
    }

    // (count - elapsed) <= count, so the quotient never exceeds `total`.
    ((total as u128) * (count - elapsed_periods) / count) as u64
}

/// Instant at which the hard lock ends and installments begin, saturating
/// at `u64::MAX`.
pub fn fully_vested_at(
    vesting_delay: u64,
    period_seconds: u64,
    lockup_delay: u64,
    period: u64,
    funding: u64,
) -> u64 {
    let lockup_seconds = lockup_delay
        .saturating_mul(period)
        .saturating_mul(period_seconds);
    funding
        .saturating_add(vesting_delay.saturating_mul(period_seconds))
        .saturating_add(lockup_seconds)
}

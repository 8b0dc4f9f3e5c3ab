use anchor_lang::prelude::*;

#[error_code]
pub enum LockupError {
    #[msg("Signer is not the creator of this escrow")]
    NotCreator,

    #[msg("Signer is not the owner of this escrow")]
    NotOwner,

    #[msg("Signer is not the funder of this escrow")]
    NotFunder,

    #[msg("Signer is neither the owner nor the funder of this escrow")]
    NotOwnerOrFunder,

    #[msg("Signer is neither the owner nor the delegate of this escrow")]
    NotOwnerOrDelegate,

    #[msg("Signer is not the factory authority")]
    NotAuthority,

    #[msg("Vesting terms have already been templated")]
    TemplateAlreadySet,

    #[msg("Vesting terms must be non-zero: period seconds, distribution count and distribution seconds")]
    InvalidTemplate,

    #[msg("Vesting terms have not been templated")]
    TemplateNotSet,

    #[msg("Owner and funder have already been assigned")]
    RolesAlreadyAssigned,

    #[msg("Funding or total is already committed")]
    AlreadyCommitted,

    #[msg("Period exceeds the period limit")]
    PeriodLimitExceeded,

    #[msg("Configuration deadline has passed")]
    DeadlinePassed,

    #[msg("Funding timestamp is already set")]
    FundingAlreadySet,

    #[msg("Funding timestamp can only be extended while it is still in the future")]
    FundingNotExtendable,

    #[msg("Escrow has not been funded")]
    NotFunded,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Adjustment exceeds the committed total")]
    AdjustmentExceedsTotal,

    #[msg("Withdrawal would leave less than the minimum retained balance")]
    BelowMinimumBalance,

    #[msg("Insufficient available balance")]
    InsufficientBalance,

    #[msg("Minimum retained balance is not zero yet")]
    StillVesting,

    #[msg("Consensus participation is disabled for this escrow")]
    NotStakeable,

    #[msg("Version updates are not approved for this escrow")]
    NotUpdatable,

    #[msg("Deletion is not approved for this escrow")]
    NotDeletable,

    #[msg("Identity cannot be the zero address")]
    InvalidIdentity,

    #[msg("Participation validity window is inverted")]
    InvalidValidityWindow,

    #[msg("Destination does not match the escrow owner")]
    OwnerMismatch,

    #[msg("Fee collector does not match the factory")]
    FeeCollectorMismatch,

    #[msg("Escrow was not deployed by this factory")]
    ParentMismatch,

    #[msg("Paid operations must be top-level instructions of this program")]
    NestedInvocation,

    #[msg("No companion transfer precedes this instruction in the transaction")]
    MissingCompanionTransfer,

    #[msg("Companion instruction is not a lamport transfer")]
    NotATransfer,

    #[msg("Companion transfer sender does not match the expected payer")]
    PaymentSenderMismatch,

    #[msg("Companion transfer receiver is not this escrow")]
    PaymentReceiverMismatch,

    #[msg("Companion transfer amount does not match the required fee")]
    PaymentAmountMismatch,

    #[msg("Companion transfer amount must be greater than zero")]
    ZeroPayment,

    #[msg("Participation fee must be greater than zero")]
    InvalidParticipationFee,

    #[msg("Fee collector cannot be the zero address")]
    InvalidFeeCollector,

    #[msg("Authority cannot be the zero address")]
    InvalidAuthority,

    #[msg("Arithmetic overflow")]
    Overflow,
}

use anchor_lang::error::Error;

/// Numeric code of an Anchor error, for comparison against `u32::from(LockupError::..)`.
pub(crate) fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(e) => e.error_code_number,
        Error::ProgramError(_) => u32::MAX,
    }
}

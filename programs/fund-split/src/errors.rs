use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("No redeemable funds")]
    NoRedeemableFunds,
    #[msg("Member with address does not exist")]
    MemberWithAddressDoesNotExist,
    #[msg("Insufficient account balance")]
    InsufficientAccountBalance,
    #[msg("Please withdraw all member funds before taking this action")]
    MembersFundsHaveNotBeenWithdrawn,
    #[msg("Total member share must be 100 percent")]
    InvalidMemberShare,
    #[msg("Member must withdraw their own funds")]
    NotAuthorizedToWithdrawFunds,
    #[msg("Checked REM error")]
    CheckedRemError,
    #[msg("Numerical overflow error")]
    NumericalOverflowError,
    #[msg("Numerical underflow error")]
    NumericalUnderflowError,
    #[msg("Must be initialized with at least 1 member")]
    NoMembersProvided,
    #[msg("Split vault cannot list itself as a member")]
    SelfReferencingMember,
}

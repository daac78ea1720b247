pub mod initialize;
pub use initialize::*;

pub mod allocate;
pub use allocate::*;

pub mod withdraw;
pub use withdraw::*;

pub mod close;
pub use close::*;

use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Current unix time in the unsigned domain the vault record stores. The
/// substrate clock is signed; a pre-epoch reading is refused rather than
/// wrapped.
pub(crate) fn unix_timestamp() -> Result<u64> {
    let clock = Clock::get()?;
    let now =
        u64::try_from(clock.unix_timestamp).map_err(|_| ErrorCode::NumericalUnderflowError)?;
    Ok(now)
}

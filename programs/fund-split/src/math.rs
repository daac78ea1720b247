//! Checked u64 arithmetic for share and amount math. Every operation either
//! returns the exact result or fails with the matching arithmetic error;
//! nothing wraps or truncates silently.

use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

pub fn checked_add(a: u64, b: u64) -> Result<u64> {
    let sum = a.checked_add(b).ok_or(ErrorCode::NumericalOverflowError)?;
    Ok(sum)
}

pub fn checked_sub(a: u64, b: u64) -> Result<u64> {
    let difference = a.checked_sub(b).ok_or(ErrorCode::NumericalUnderflowError)?;
    Ok(difference)
}

pub fn checked_mul(a: u64, b: u64) -> Result<u64> {
    let product = a.checked_mul(b).ok_or(ErrorCode::NumericalOverflowError)?;
    Ok(product)
}

// Division and remainder on u64 fail only on a zero divisor, so both map
// to the same error.
pub fn checked_div(a: u64, b: u64) -> Result<u64> {
    let quotient = a.checked_div(b).ok_or(ErrorCode::CheckedRemError)?;
    Ok(quotient)
}

pub fn checked_rem(a: u64, b: u64) -> Result<u64> {
    let remainder = a.checked_rem(b).ok_or(ErrorCode::CheckedRemError)?;
    Ok(remainder)
}

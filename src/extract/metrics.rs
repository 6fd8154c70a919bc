//! Derived account metrics.

use rust_decimal::Decimal;

use super::numeric::round2;

/// Computes the drawdown: the percentage decline of equity relative to
/// balance, as a negative number when equity is below balance.
///
/// Absent when either input is missing, or when balance is zero (the
/// division is guarded rather than producing an unbounded value).
pub fn drawdown(balance: Option<Decimal>, equity: Option<Decimal>) -> Option<Decimal> {
    let (balance, equity) = (balance?, equity?);
    if balance.is_zero() {
        return None;
    }

    // balance -> 100%, equity -> x
    let value = (Decimal::ONE_HUNDRED - Decimal::ONE_HUNDRED * equity / balance)
        * Decimal::NEGATIVE_ONE;
    Some(round2(value))
}

/// Computes the overall drawdown: equity decline relative to net deposited
/// capital (deposits minus withdrawals) instead of balance.
///
/// Absent when any input is missing or when the adjusted deposit is exactly
/// zero.
pub fn overall_drawdown(
    deposits: Option<Decimal>,
    withdrawals: Option<Decimal>,
    equity: Option<Decimal>,
) -> Option<Decimal> {
    let (deposits, withdrawals, equity) = (deposits?, withdrawals?, equity?);

    let adjusted_deposit = deposits - withdrawals;
    if adjusted_deposit.is_zero() {
        return None;
    }

    // adjusted deposit -> 100%, equity -> x
    let value = (Decimal::ONE_HUNDRED - Decimal::ONE_HUNDRED * equity / adjusted_deposit)
        * Decimal::NEGATIVE_ONE;
    Some(round2(value))
}

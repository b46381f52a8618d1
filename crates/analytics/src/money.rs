/// Reported amounts are whole cents.
pub const MONEY_DECIMAL_PLACES: usize = 2;

/// Rounds an amount to cents, ties going to the even cent.
///
/// The tie is decided on the exact binary value of `amount`, not on the decimal text
/// it was parsed from: `12.345` is stored slightly above the half cent and becomes
/// `12.35`, while `2.675` is stored slightly below and becomes `2.67`. Non-finite
/// values come back unchanged.
pub fn round_money(amount: f64) -> f64 {
    if !amount.is_finite() {
        return amount;
    }
    format!("{amount:.prec$}", prec = MONEY_DECIMAL_PLACES)
        .parse()
        .unwrap_or(amount)
}

//! Tip-amount validation and decimal-string conversion.

use crate::Balance;

// =========================================================================
// CONSTANTS
// =========================================================================

/// Decimal places of the native token.
pub const NATIVE_DECIMALS: u32 = 18;

/// Smallest units per whole token.
pub const SCALE: Balance = 1_000_000_000_000_000_000;

/// Minimum accepted tip: 0.0001 tokens.
pub const MIN_TIP: Balance = 100_000_000_000_000;

/// Human-readable rendering of [`MIN_TIP`].
pub const MIN_TIP_DISPLAY: &str = "0.0001";

/// Amount pre-filled in the tip form.
pub const DEFAULT_TIP: &str = "0.001";

// =========================================================================
// ERRORS
// =========================================================================

/// Rejection reasons for a user-supplied tip amount. The `Display` text is
/// shown verbatim in the amount field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Enter a valid amount")]
    NotANumber,
    #[error("Amount must be greater than 0")]
    NotPositive,
    #[error("Minimum tip: {}", MIN_TIP_DISPLAY)]
    BelowMinimum,
    #[error("Insufficient funds")]
    InsufficientFunds,
}

// =========================================================================
// VALIDATION
// =========================================================================

/// Validate a tip amount against the caller's available balance, both given
/// as decimal token strings.
///
/// Rules are checked in a fixed order and the first failure wins:
/// unparseable, then non-positive, then below [`MIN_TIP`], then over the
/// available balance. On success the amount is returned in smallest units.
/// An unparseable balance string counts as zero available.
pub fn validate_tip_amount(amount: &str, available_balance: &str) -> Result<Balance, AmountError> {
    let raw = amount.trim();

    // A well-formed negative is a number, just not a positive one.
    if let Some(rest) = raw.strip_prefix('-') {
        return match parse_units(rest) {
            Some(_) => Err(AmountError::NotPositive),
            None => Err(AmountError::NotANumber),
        };
    }

    let units = parse_units(raw).ok_or(AmountError::NotANumber)?;
    if units == 0 {
        return Err(AmountError::NotPositive);
    }
    if units < MIN_TIP {
        return Err(AmountError::BelowMinimum);
    }

    let available = parse_units(available_balance).unwrap_or(0);
    if units > available {
        return Err(AmountError::InsufficientFunds);
    }

    Ok(units)
}

/// Map a raw provider failure message to the dedicated amount-field error.
/// Only "insufficient funds" gets special treatment; every other failure
/// stays a generic per-operation message.
pub fn amount_error_from_provider(message: &str) -> Option<AmountError> {
    message
        .contains("insufficient funds")
        .then_some(AmountError::InsufficientFunds)
}

// =========================================================================
// CONVERSION
// =========================================================================

/// Parse a decimal token string ("0.05") into smallest units.
///
/// Digits past the 18th decimal place are below one smallest unit and are
/// dropped. Returns `None` for anything that is not an unsigned decimal.
pub fn parse_units(input: &str) -> Option<Balance> {
    let input = input.trim();
    let (int_part, frac_part) = match input.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (input, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let whole: Balance = if int_part.is_empty() {
        0
    } else {
        int_part.parse().ok()?
    };
    let mut units = whole.checked_mul(SCALE)?;

    let frac = &frac_part[..frac_part.len().min(NATIVE_DECIMALS as usize)];
    if !frac.is_empty() {
        let frac_units: Balance =
            frac.parse::<Balance>().ok()? * 10u128.pow(NATIVE_DECIMALS - frac.len() as u32);
        units = units.checked_add(frac_units)?;
    }

    Some(units)
}

/// Format smallest units as a decimal token string, trailing zeros trimmed.
pub fn format_units(value: Balance) -> String {
    let whole = value / SCALE;
    let frac = value % SCALE;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{frac:018}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}

/// Keystroke filter for the amount input: digits, at most one dot, at most
/// 18 fractional digits. The empty string is allowed while typing.
pub fn is_well_formed_input(input: &str) -> bool {
    let (int_part, frac_part) = match input.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (input, None),
    };
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match frac_part {
        Some(frac) => {
            frac.len() <= NATIVE_DECIMALS as usize && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => true,
    }
}

// =========================================================================
// UNIT TESTS
// =========================================================================

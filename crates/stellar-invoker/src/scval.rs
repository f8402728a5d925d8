// ============================================================================
// STELLAR-INVOKER - Contract Values
// ============================================================================
// Conversion between demo inputs and Soroban `ScVal` arguments, plus a
// human-readable rendering of contract return values.
// ============================================================================

use crate::error::InvokerError;
use crate::strkey::{
    decode_contract_id, decode_public_key, encode_contract_id, encode_public_key,
};
use crate::Result;
use stellar_xdr::curr::{
    AccountId, Hash, Int128Parts, PublicKey, ScAddress, ScVal, Uint256,
};

/// Stroops per whole token (7 decimal places)
pub const STROOPS_PER_UNIT: i128 = 10_000_000;

const DECIMALS: usize = 7;

/// Encode a G... account or C... contract as an address argument
pub fn address_arg(address: &str) -> Result<ScVal> {
    let sc_address = if address.starts_with('C') {
        ScAddress::Contract(Hash(decode_contract_id(address)?))
    } else {
        ScAddress::Account(account_id(address)?)
    };
    Ok(ScVal::Address(sc_address))
}

/// Encode an amount (already in stroops) as an i128 argument
pub fn i128_arg(value: i128) -> ScVal {
    ScVal::I128(Int128Parts {
        hi: (value >> 64) as i64,
        lo: value as u64,
    })
}

pub(crate) fn account_id(address: &str) -> Result<AccountId> {
    let key = decode_public_key(address)?;
    Ok(AccountId(PublicKey::PublicKeyTypeEd25519(Uint256(key))))
}

/// Convert a decimal token amount to stroops.
///
/// Digits past the seventh decimal place are truncated. Zero, negative and
/// non-numeric inputs are rejected, as are amounts smaller than one stroop.
///
/// ```
/// use stellar_invoker::scval::to_stroops;
///
/// assert_eq!(to_stroops("2.5").unwrap(), 25_000_000);
/// assert!(to_stroops("-1").is_err());
/// ```
pub fn to_stroops(amount: &str) -> Result<i128> {
    let trimmed = amount.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(InvokerError::InvalidAmount(amount.to_string()));
    }

    let whole_value: i128 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| InvokerError::InvalidAmount(amount.to_string()))?
    };

    let mut fraction_digits: String = fraction.chars().take(DECIMALS).collect();
    while fraction_digits.len() < DECIMALS {
        fraction_digits.push('0');
    }
    let fraction_value: i128 = fraction_digits
        .parse()
        .map_err(|_| InvokerError::InvalidAmount(amount.to_string()))?;

    let stroops = whole_value
        .checked_mul(STROOPS_PER_UNIT)
        .and_then(|v| v.checked_add(fraction_value))
        .ok_or_else(|| InvokerError::InvalidAmount(amount.to_string()))?;

    if stroops <= 0 {
        return Err(InvokerError::InvalidAmount(amount.to_string()));
    }

    Ok(stroops)
}

/// Format stroops as a decimal token amount, trimming trailing zeros
pub fn format_stroops(stroops: i128) -> String {
    let sign = if stroops < 0 { "-" } else { "" };
    let abs = stroops.unsigned_abs();
    let unit = STROOPS_PER_UNIT as u128;
    let whole = abs / unit;
    let fraction = abs % unit;

    if fraction == 0 {
        return format!("{}{}", sign, whole);
    }

    let fraction = format!("{:07}", fraction);
    format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
}

/// Render a contract return value for display
pub fn render_scval(value: &ScVal) -> String {
    match value {
        ScVal::Void => "()".to_string(),
        ScVal::Bool(b) => b.to_string(),
        ScVal::U32(v) => v.to_string(),
        ScVal::I32(v) => v.to_string(),
        ScVal::U64(v) => v.to_string(),
        ScVal::I64(v) => v.to_string(),
        ScVal::I128(parts) => i128_from_parts(parts).to_string(),
        ScVal::Address(address) => render_address(address),
        ScVal::Symbol(symbol) => String::from_utf8_lossy(symbol.0.as_slice()).into_owned(),
        ScVal::String(string) => String::from_utf8_lossy(string.0.as_slice()).into_owned(),
        ScVal::Vec(Some(items)) => {
            let rendered: Vec<String> = items.0.iter().map(render_scval).collect();
            format!("[{}]", rendered.join(", "))
        }
        ScVal::Vec(None) => "[]".to_string(),
        other => format!("{:?}", other),
    }
}

/// Reassemble an i128 from its XDR halves
pub fn i128_from_parts(parts: &Int128Parts) -> i128 {
    ((parts.hi as i128) << 64) | (parts.lo as i128)
}

fn render_address(address: &ScAddress) -> String {
    match address {
        ScAddress::Account(AccountId(PublicKey::PublicKeyTypeEd25519(Uint256(key)))) => {
            encode_public_key(key)
        }
        ScAddress::Contract(Hash(hash)) => encode_contract_id(hash),
    }
}

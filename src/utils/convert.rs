use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::common::error::ProcessorError;

/// Parses a raw on-chain integer amount from its decimal-string form.
///
/// Decoded event payloads carry uint112/uint256 amounts as decimal strings;
/// anything that is not a plain integer is a malformed event.
pub fn parse_raw_amount(raw: &str) -> Result<BigInt, ProcessorError> {
    BigInt::from_str(raw).map_err(|e| {
        ProcessorError::malformed(format!("raw amount `{raw}` is not an integer: {e}"))
    })
}

/// Converts a raw integer token amount to its decimal representation by
/// placing the scale point `decimals` digits from the right.
///
/// Exact for any magnitude; no division, no rounding.
pub fn convert_token_to_decimal(raw: &BigInt, decimals: u32) -> BigDecimal {
    BigDecimal::new(raw.clone(), i64::from(decimals))
}

/// Null address: mint source and burn destination for liquidity tokens
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Raw liquidity-token amount permanently locked by a pair's first mint
pub const MINIMUM_LIQUIDITY_RAW: u64 = 1000;

/// Liquidity tokens always carry 18 decimals
pub const LP_TOKEN_DECIMALS: u32 = 18;

/// Seconds in one aggregation day
pub const SECONDS_PER_DAY: i64 = 86400;

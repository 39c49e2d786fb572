use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use super::exchange_models::{Pair, Token};

/// Protocol-level day bucket, keyed by the bare day index.
///
/// The total-volume mirrors are zeroed at creation and never refreshed;
/// day-local volume lives in the `daily_*` fields.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProtocolDayData {
    /// `{dayIndex}` as a string.
    pub id: String,
    /// Day start, `dayIndex * 86400`, in epoch seconds.
    pub date: i64,
    pub daily_volume_usd: BigDecimal,
    pub daily_volume_ftm: BigDecimal,
    pub daily_volume_untracked: BigDecimal,
    pub total_volume_usd: BigDecimal,
    pub total_volume_ftm: BigDecimal,
    pub total_liquidity_usd: BigDecimal,
    pub total_liquidity_ftm: BigDecimal,
    /// Mirror of the protocol's global transaction count.
    pub tx_count: i64,
    /// Transactions that touched this bucket during its day.
    pub daily_txns: i64,
}

impl ProtocolDayData {
    pub fn new(id: impl Into<String>, date: i64) -> Self {
        ProtocolDayData {
            id: id.into(),
            date,
            daily_volume_usd: BigDecimal::zero(),
            daily_volume_ftm: BigDecimal::zero(),
            daily_volume_untracked: BigDecimal::zero(),
            total_volume_usd: BigDecimal::zero(),
            total_volume_ftm: BigDecimal::zero(),
            total_liquidity_usd: BigDecimal::zero(),
            total_liquidity_ftm: BigDecimal::zero(),
            tx_count: 0,
            daily_txns: 0,
        }
    }
}

/// Pair-level day bucket, keyed by `{pairAddress}-{dayIndex}`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PairDayData {
    pub id: String,
    pub date: i64,
    pub pair_address: String,
    pub token0: String,
    pub token1: String,
    pub daily_volume_token0: BigDecimal,
    pub daily_volume_token1: BigDecimal,
    pub daily_volume_usd: BigDecimal,
    pub daily_txns: i64,
    pub total_supply: BigDecimal,
    pub reserve0: BigDecimal,
    pub reserve1: BigDecimal,
    pub reserve_usd: BigDecimal,
}

impl PairDayData {
    pub fn new(id: impl Into<String>, date: i64, pair: &Pair) -> Self {
        PairDayData {
            id: id.into(),
            date,
            pair_address: pair.id.clone(),
            token0: pair.token0.clone(),
            token1: pair.token1.clone(),
            daily_volume_token0: BigDecimal::zero(),
            daily_volume_token1: BigDecimal::zero(),
            daily_volume_usd: BigDecimal::zero(),
            daily_txns: 0,
            total_supply: BigDecimal::zero(),
            reserve0: BigDecimal::zero(),
            reserve1: BigDecimal::zero(),
            reserve_usd: BigDecimal::zero(),
        }
    }
}

/// Token-level day bucket, keyed by `{tokenAddress}-{dayIndex}`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TokenDayData {
    pub id: String,
    pub date: i64,
    pub token: String,
    pub daily_volume_token: BigDecimal,
    pub daily_volume_ftm: BigDecimal,
    pub daily_volume_usd: BigDecimal,
    pub daily_txns: i64,
    pub total_liquidity_token: BigDecimal,
    pub total_liquidity_ftm: BigDecimal,
    pub total_liquidity_usd: BigDecimal,
    /// USD price at the latest refresh, `derived_ftm * ftm_price_usd`.
    pub price_usd: BigDecimal,
}

impl TokenDayData {
    pub fn new(id: impl Into<String>, date: i64, token: &Token) -> Self {
        TokenDayData {
            id: id.into(),
            date,
            token: token.id.clone(),
            daily_volume_token: BigDecimal::zero(),
            daily_volume_ftm: BigDecimal::zero(),
            daily_volume_usd: BigDecimal::zero(),
            daily_txns: 0,
            total_liquidity_token: BigDecimal::zero(),
            total_liquidity_ftm: BigDecimal::zero(),
            total_liquidity_usd: BigDecimal::zero(),
            price_usd: BigDecimal::zero(),
        }
    }
}

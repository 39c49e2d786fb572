// Copyright © Fantom Exchange Indexer Contributors
// SPDX-License-Identifier: Apache-2.0

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

/// Singleton holding the current USD price of FTM.
///
/// Lives under the fixed identity [`NativePrice::ID`]; refreshed from the
/// pricing oracle on every reserve-changing event.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NativePrice {
    pub id: String,
    pub ftm_price_usd: BigDecimal,
}

impl NativePrice {
    /// Well-known identity of the singleton.
    pub const ID: &'static str = "1";

    pub fn new() -> Self {
        NativePrice {
            id: Self::ID.to_string(),
            ftm_price_usd: BigDecimal::zero(),
        }
    }
}

/// Per-token cumulative metrics.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Token {
    /// Lowercase hex contract address.
    pub id: String,
    pub symbol: String,
    pub decimals: u32,
    /// Price of one token in FTM, refreshed from the oracle on every Sync.
    pub derived_ftm: BigDecimal,
    /// Cumulative trade volume in token units (both swap legs).
    pub trade_volume: BigDecimal,
    /// Cumulative whitelist-tracked trade volume in USD.
    pub trade_volume_usd: BigDecimal,
    /// Cumulative derived-price volume in USD, whitelist-independent.
    pub untracked_volume_usd: BigDecimal,
    /// Sum of this token's latest reserve contribution from every pair
    /// containing it, maintained subtract-then-readd by the Sync handler.
    pub total_liquidity: BigDecimal,
    pub tx_count: i64,
}

impl Token {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>, decimals: u32) -> Self {
        Token {
            id: id.into(),
            symbol: symbol.into(),
            decimals,
            derived_ftm: BigDecimal::zero(),
            trade_volume: BigDecimal::zero(),
            trade_volume_usd: BigDecimal::zero(),
            untracked_volume_usd: BigDecimal::zero(),
            total_liquidity: BigDecimal::zero(),
            tx_count: 0,
        }
    }
}

/// Per-pair reserves, prices and cumulative volumes.
///
/// Reserve fields always reflect the most recently processed Sync event for
/// this pair.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Pair {
    /// Lowercase hex contract address.
    pub id: String,
    /// Address of the pair's first constituent token.
    pub token0: String,
    /// Address of the pair's second constituent token.
    pub token1: String,
    pub reserve0: BigDecimal,
    pub reserve1: BigDecimal,
    /// Liquidity-token supply, maintained by the Transfer handler.
    pub total_supply: BigDecimal,
    /// reserve0 / reserve1, zero when reserve1 is zero.
    pub token0_price: BigDecimal,
    /// reserve1 / reserve0, zero when reserve0 is zero.
    pub token1_price: BigDecimal,
    /// Whitelist-tracked reserve value in FTM; the pair's contribution to
    /// the protocol's total tracked liquidity.
    pub tracked_reserve_ftm: BigDecimal,
    pub reserve_ftm: BigDecimal,
    pub reserve_usd: BigDecimal,
    pub volume_token0: BigDecimal,
    pub volume_token1: BigDecimal,
    /// Cumulative whitelist-tracked swap volume in USD.
    pub volume_usd: BigDecimal,
    pub untracked_volume_usd: BigDecimal,
    pub tx_count: i64,
}

impl Pair {
    pub fn new(id: impl Into<String>, token0: impl Into<String>, token1: impl Into<String>) -> Self {
        Pair {
            id: id.into(),
            token0: token0.into(),
            token1: token1.into(),
            reserve0: BigDecimal::zero(),
            reserve1: BigDecimal::zero(),
            total_supply: BigDecimal::zero(),
            token0_price: BigDecimal::zero(),
            token1_price: BigDecimal::zero(),
            tracked_reserve_ftm: BigDecimal::zero(),
            reserve_ftm: BigDecimal::zero(),
            reserve_usd: BigDecimal::zero(),
            volume_token0: BigDecimal::zero(),
            volume_token1: BigDecimal::zero(),
            volume_usd: BigDecimal::zero(),
            untracked_volume_usd: BigDecimal::zero(),
            tx_count: 0,
        }
    }
}

/// Singleton protocol-wide totals.
///
/// Keyed by the factory contract address. Tracked liquidity is maintained
/// subtract-then-readd against each pair's tracked contribution.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProtocolTotals {
    pub id: String,
    /// Number of registered pairs, maintained by the registration path.
    pub pair_count: i64,
    pub total_volume_usd: BigDecimal,
    pub total_volume_ftm: BigDecimal,
    pub untracked_volume_usd: BigDecimal,
    pub total_liquidity_ftm: BigDecimal,
    pub total_liquidity_usd: BigDecimal,
    pub tx_count: i64,
}

impl ProtocolTotals {
    /// Well-known identity of the singleton: the factory contract address.
    pub const ID: &'static str = "0xef45d134b73241eda7703fa787148d9c9f4950b0";

    pub fn new() -> Self {
        ProtocolTotals {
            id: Self::ID.to_string(),
            pair_count: 0,
            total_volume_usd: BigDecimal::zero(),
            total_volume_ftm: BigDecimal::zero(),
            untracked_volume_usd: BigDecimal::zero(),
            total_liquidity_ftm: BigDecimal::zero(),
            total_liquidity_usd: BigDecimal::zero(),
            tx_count: 0,
        }
    }
}

// Copyright © Fantom Exchange Indexer Contributors
// SPDX-License-Identifier: Apache-2.0

//! # Pricing Layer
//!
//! This module defines the pricing contract the event handlers consume and a
//! fixed-table implementation for replay runs and tests.
//!
//! ## Valuation Model
//!
//! Every price is quoted through FTM, the native currency:
//! - **Derived price**: one token's value in FTM (wrapped FTM pins at 1)
//! - **USD price**: derived price times the current FTM/USD price
//! - **Tracked amounts**: only legs involving whitelisted tokens count, which
//!   keeps illiquid or manipulated routes out of headline volume/liquidity
//! - **Untracked amounts**: full derived-price valuation regardless of
//!   whitelist status, always computed as a fallback metric
//!
//! The transitive route-finding algorithm that discovers derived prices from
//! pair reserves lives outside this crate; implementations of
//! [`PricingOracle`] supply already-derived prices.

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::db::common::models::Token;

/// Well-known Fantom token addresses and the default whitelist
pub mod constants;

/// Fixed-table oracle driven by configuration
pub mod static_oracle;

pub use static_oracle::StaticPriceOracle;

/// Price source consumed by the Sync and Swap handlers.
///
/// All four operations are total: unknown tokens derive to zero and
/// non-whitelisted combinations track to zero, never to a fault.
#[async_trait]
pub trait PricingOracle: Send + Sync {
    /// Current USD price of FTM.
    async fn ftm_price_usd(&self) -> BigDecimal;

    /// Current price of one `token` in FTM; zero when no route is known.
    async fn derived_ftm_per_token(&self, token: &Token) -> BigDecimal;

    /// USD value of a swap's two legs counted by whitelist membership:
    /// average of both legs when both tokens are whitelisted, the
    /// whitelisted leg alone when only one is, zero when neither is.
    async fn tracked_volume_usd(
        &self,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
        ftm_price: &BigDecimal,
    ) -> BigDecimal;

    /// USD value of a pair's reserves counted by whitelist membership: sum
    /// of both sides when both tokens are whitelisted, twice the whitelisted
    /// side when only one is, zero when neither is.
    async fn tracked_liquidity_usd(
        &self,
        reserve0: &BigDecimal,
        token0: &Token,
        reserve1: &BigDecimal,
        token1: &Token,
        ftm_price: &BigDecimal,
    ) -> BigDecimal;
}

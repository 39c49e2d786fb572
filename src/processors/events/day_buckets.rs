use std::sync::Arc;

use tracing::debug;

use crate::common::error::ProcessorError;
use crate::db::common::models::{
    NativePrice, Pair, PairDayData, ProtocolDayData, ProtocolTotals, Token, TokenDayData,
};
use crate::db::entity_store::EntityStore;
use crate::processors::events::constants::SECONDS_PER_DAY;

/// Day index of an event timestamp; buckets roll over at 00:00 UTC.
///
/// Truncating division, correct only for the non-negative epoch seconds
/// block timestamps carry.
pub fn day_index(timestamp: i64) -> i64 {
    timestamp / SECONDS_PER_DAY
}

/// Start of a day-index's day in epoch seconds.
pub fn day_start(day: i64) -> i64 {
    day * SECONDS_PER_DAY
}

/// Identity of the protocol bucket: the bare day index.
pub fn protocol_day_id(day: i64) -> String {
    day.to_string()
}

/// Identity of a pair bucket: `{pairAddress}-{dayIndex}`.
pub fn pair_day_id(pair_address: &str, day: i64) -> String {
    format!("{pair_address}-{day}")
}

/// Identity of a token bucket: `{tokenAddress}-{dayIndex}`.
pub fn token_day_id(token_address: &str, day: i64) -> String {
    format!("{token_address}-{day}")
}

fn day_label(date: i64) -> String {
    chrono::DateTime::from_timestamp(date, 0)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Get-or-create access to the three day-bucket kinds.
///
/// Every operation reuses the existing bucket for `(parent, day)` when one
/// is stored, refreshes its snapshot fields from the current parent state,
/// and bumps its day-local transaction counter. Buckets are returned
/// unsaved; the calling handler layers its event-specific deltas and
/// persists.
pub struct DayBucketManager {
    store: Arc<dyn EntityStore>,
}

impl DayBucketManager {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        DayBucketManager { store }
    }

    /// Protocol-level bucket for the event's day.
    ///
    /// Snapshot fields: total liquidity (USD and FTM) and the global
    /// transaction-count mirror. The total-volume mirrors stay zeroed.
    pub async fn update_protocol_day_data(
        &self,
        protocol: &ProtocolTotals,
        timestamp: i64,
    ) -> Result<ProtocolDayData, ProcessorError> {
        let day = day_index(timestamp);
        let id = protocol_day_id(day);
        let mut bucket = match self.store.load_protocol_day_data(&id).await? {
            Some(existing) => existing,
            None => {
                let date = day_start(day);
                debug!("🪣 Created protocol day bucket {} ({})", id, day_label(date));
                ProtocolDayData::new(&id, date)
            }
        };

        bucket.total_liquidity_usd = protocol.total_liquidity_usd.clone();
        bucket.total_liquidity_ftm = protocol.total_liquidity_ftm.clone();
        bucket.tx_count = protocol.tx_count;
        bucket.daily_txns += 1;
        Ok(bucket)
    }

    /// Pair-level bucket for the event's day.
    ///
    /// Snapshot fields: total supply, both reserves and the reserve value
    /// in USD.
    pub async fn update_pair_day_data(
        &self,
        pair: &Pair,
        timestamp: i64,
    ) -> Result<PairDayData, ProcessorError> {
        let day = day_index(timestamp);
        let id = pair_day_id(&pair.id, day);
        let mut bucket = match self.store.load_pair_day_data(&id).await? {
            Some(existing) => existing,
            None => {
                let date = day_start(day);
                debug!("🪣 Created pair day bucket {} ({})", id, day_label(date));
                PairDayData::new(&id, date, pair)
            }
        };

        bucket.total_supply = pair.total_supply.clone();
        bucket.reserve0 = pair.reserve0.clone();
        bucket.reserve1 = pair.reserve1.clone();
        bucket.reserve_usd = pair.reserve_usd.clone();
        bucket.daily_txns += 1;
        Ok(bucket)
    }

    /// Token-level bucket for the event's day.
    ///
    /// Snapshot fields: USD price and total liquidity in token units, FTM
    /// and USD, all valued at the token's current derived price.
    pub async fn update_token_day_data(
        &self,
        token: &Token,
        native_price: &NativePrice,
        timestamp: i64,
    ) -> Result<TokenDayData, ProcessorError> {
        let day = day_index(timestamp);
        let id = token_day_id(&token.id, day);
        let mut bucket = match self.store.load_token_day_data(&id).await? {
            Some(existing) => existing,
            None => {
                let date = day_start(day);
                debug!("🪣 Created token day bucket {} ({})", id, day_label(date));
                TokenDayData::new(&id, date, token)
            }
        };

        bucket.price_usd = &token.derived_ftm * &native_price.ftm_price_usd;
        bucket.total_liquidity_token = token.total_liquidity.clone();
        bucket.total_liquidity_ftm = &token.total_liquidity * &token.derived_ftm;
        bucket.total_liquidity_usd =
            &bucket.total_liquidity_ftm * &native_price.ftm_price_usd;
        bucket.daily_txns += 1;
        Ok(bucket)
    }
}

use std::sync::Arc;

use bigdecimal::{BigDecimal, Zero};
use num_bigint::BigInt;
use tracing::debug;

use crate::common::error::{EntityKind, ProcessorError};
use crate::db::common::models::{NativePrice, Pair, ProtocolTotals, Token};
use crate::db::entity_store::EntityStore;
use crate::pricing::PricingOracle;
use crate::processors::events::constants::{
    LP_TOKEN_DECIMALS, MINIMUM_LIQUIDITY_RAW, ZERO_ADDRESS,
};
use crate::processors::events::day_buckets::DayBucketManager;
use crate::processors::events::pair_event::{EventEnvelope, PairEvent};
use crate::utils::convert::{convert_token_to_decimal, parse_raw_amount};

/// Applies one decoded pair event to the aggregate state.
///
/// Each handler runs a full read-modify-write cycle: load owned working
/// copies, recompute, save. Handlers never call each other; Mint, Burn and
/// Swap share only the day-bucket manager and the common load path.
pub struct PairProcessor {
    store: Arc<dyn EntityStore>,
    pricing: Arc<dyn PricingOracle>,
    day_buckets: DayBucketManager,
}

/// Working copies of every record the volume-bearing handlers touch.
struct PairContext {
    pair: Pair,
    token0: Token,
    token1: Token,
    protocol: ProtocolTotals,
    native: NativePrice,
}

impl PairProcessor {
    pub fn new(store: Arc<dyn EntityStore>, pricing: Arc<dyn PricingOracle>) -> Self {
        let day_buckets = DayBucketManager::new(store.clone());
        PairProcessor {
            store,
            pricing,
            day_buckets,
        }
    }

    /// Dispatches an envelope to the handler for its event kind.
    pub async fn handle_event(&self, envelope: &EventEnvelope) -> Result<(), ProcessorError> {
        match &envelope.event {
            PairEvent::Transfer { from, to, value } => {
                self.handle_transfer(envelope, from, to, value).await
            }
            PairEvent::Sync { reserve0, reserve1 } => {
                self.handle_sync(envelope, reserve0, reserve1).await
            }
            PairEvent::Mint => self.handle_mint(envelope).await,
            PairEvent::Burn => self.handle_burn(envelope).await,
            PairEvent::Swap {
                amount0_in,
                amount1_in,
                amount0_out,
                amount1_out,
            } => {
                self.handle_swap(envelope, amount0_in, amount1_in, amount0_out, amount1_out)
                    .await
            }
        }
    }

    /// Liquidity-token transfer: mints and pair-held burns move the pair's
    /// total supply; everything else is a no-op here.
    async fn handle_transfer(
        &self,
        envelope: &EventEnvelope,
        from: &str,
        to: &str,
        value_raw: &str,
    ) -> Result<(), ProcessorError> {
        let value_int = parse_raw_amount(value_raw)?;

        // A pair's very first mint locks MINIMUM_LIQUIDITY at the null
        // address; that transfer carries no accounting weight.
        if to == ZERO_ADDRESS && value_int == BigInt::from(MINIMUM_LIQUIDITY_RAW) {
            return Ok(());
        }

        let mut pair = self.must_load_pair(&envelope.pair_address).await?;
        let value = convert_token_to_decimal(&value_int, LP_TOKEN_DECIMALS);
        let mut supply_changed = false;

        if from == ZERO_ADDRESS {
            pair.total_supply += &value;
            supply_changed = true;
        }

        if to == ZERO_ADDRESS && from == pair.id {
            pair.total_supply -= &value;
            supply_changed = true;
        }

        if supply_changed {
            debug!(
                "💾 Pair {} supply now {} after transfer of {}",
                pair.id, pair.total_supply, value
            );
            self.store.save_pair(&pair).await?;
        }
        Ok(())
    }

    /// Reserve update: the central recomputation point for prices and
    /// liquidity.
    ///
    /// Previous contributions are subtracted before the new reserves are
    /// applied, which keeps protocol and token liquidity totals correct
    /// without ever recomputing them across all pairs.
    async fn handle_sync(
        &self,
        envelope: &EventEnvelope,
        reserve0_raw: &str,
        reserve1_raw: &str,
    ) -> Result<(), ProcessorError> {
        let PairContext {
            mut pair,
            mut token0,
            mut token1,
            mut protocol,
            mut native,
        } = self.load_pair_context(&envelope.pair_address).await?;

        // Undo this pair's previous contributions.
        protocol.total_liquidity_ftm -= &pair.tracked_reserve_ftm;
        token0.total_liquidity -= &pair.reserve0;
        token1.total_liquidity -= &pair.reserve1;

        pair.reserve0 =
            convert_token_to_decimal(&parse_raw_amount(reserve0_raw)?, token0.decimals);
        pair.reserve1 =
            convert_token_to_decimal(&parse_raw_amount(reserve1_raw)?, token1.decimals);

        pair.token0_price = if !pair.reserve1.is_zero() {
            &pair.reserve0 / &pair.reserve1
        } else {
            BigDecimal::zero()
        };
        pair.token1_price = if !pair.reserve0.is_zero() {
            &pair.reserve1 / &pair.reserve0
        } else {
            BigDecimal::zero()
        };

        native.ftm_price_usd = self.pricing.ftm_price_usd().await;
        token0.derived_ftm = self.pricing.derived_ftm_per_token(&token0).await;
        token1.derived_ftm = self.pricing.derived_ftm_per_token(&token1).await;

        let tracked_liquidity_usd = self
            .pricing
            .tracked_liquidity_usd(
                &pair.reserve0,
                &token0,
                &pair.reserve1,
                &token1,
                &native.ftm_price_usd,
            )
            .await;
        let tracked_liquidity_ftm = if !native.ftm_price_usd.is_zero() {
            &tracked_liquidity_usd / &native.ftm_price_usd
        } else {
            BigDecimal::zero()
        };

        pair.tracked_reserve_ftm = tracked_liquidity_ftm.clone();
        pair.reserve_ftm =
            &pair.reserve0 * &token0.derived_ftm + &pair.reserve1 * &token1.derived_ftm;
        pair.reserve_usd = &pair.reserve_ftm * &native.ftm_price_usd;

        // Re-add the fresh contributions.
        protocol.total_liquidity_ftm += &tracked_liquidity_ftm;
        protocol.total_liquidity_usd = &protocol.total_liquidity_ftm * &native.ftm_price_usd;
        token0.total_liquidity += &pair.reserve0;
        token1.total_liquidity += &pair.reserve1;

        debug!(
            "💾 Synced pair {}: reserves {} / {}, tracked {} FTM",
            pair.id, pair.reserve0, pair.reserve1, pair.tracked_reserve_ftm
        );

        self.store.save_pair(&pair).await?;
        self.store.save_protocol_totals(&protocol).await?;
        self.store.save_token(&token0).await?;
        self.store.save_token(&token1).await?;
        self.store.save_native_price(&native).await?;
        Ok(())
    }

    async fn handle_mint(&self, envelope: &EventEnvelope) -> Result<(), ProcessorError> {
        self.record_liquidity_event(envelope).await
    }

    async fn handle_burn(&self, envelope: &EventEnvelope) -> Result<(), ProcessorError> {
        self.record_liquidity_event(envelope).await
    }

    /// Shared Mint/Burn body. Quantities arrive via the companion Transfer
    /// and Sync events, so these handlers only bump the protocol transaction
    /// count and guarantee the day's buckets exist.
    async fn record_liquidity_event(
        &self,
        envelope: &EventEnvelope,
    ) -> Result<(), ProcessorError> {
        let PairContext {
            pair,
            token0,
            token1,
            mut protocol,
            native,
        } = self.load_pair_context(&envelope.pair_address).await?;

        protocol.tx_count += 1;
        self.store.save_protocol_totals(&protocol).await?;

        let pair_day = self
            .day_buckets
            .update_pair_day_data(&pair, envelope.timestamp)
            .await?;
        self.store.save_pair_day_data(&pair_day).await?;

        let token0_day = self
            .day_buckets
            .update_token_day_data(&token0, &native, envelope.timestamp)
            .await?;
        self.store.save_token_day_data(&token0_day).await?;

        let token1_day = self
            .day_buckets
            .update_token_day_data(&token1, &native, envelope.timestamp)
            .await?;
        self.store.save_token_day_data(&token1_day).await?;
        Ok(())
    }

    /// Trade against the pair: accumulates tracked and untracked volume on
    /// token, pair and protocol aggregates, then layers the day-local
    /// deltas onto the four day buckets.
    async fn handle_swap(
        &self,
        envelope: &EventEnvelope,
        amount0_in_raw: &str,
        amount1_in_raw: &str,
        amount0_out_raw: &str,
        amount1_out_raw: &str,
    ) -> Result<(), ProcessorError> {
        let PairContext {
            mut pair,
            mut token0,
            mut token1,
            mut protocol,
            native,
        } = self.load_pair_context(&envelope.pair_address).await?;

        let amount0_in =
            convert_token_to_decimal(&parse_raw_amount(amount0_in_raw)?, token0.decimals);
        let amount1_in =
            convert_token_to_decimal(&parse_raw_amount(amount1_in_raw)?, token1.decimals);
        let amount0_out =
            convert_token_to_decimal(&parse_raw_amount(amount0_out_raw)?, token0.decimals);
        let amount1_out =
            convert_token_to_decimal(&parse_raw_amount(amount1_out_raw)?, token1.decimals);

        let amount0_total = &amount0_in + &amount0_out;
        let amount1_total = &amount1_in + &amount1_out;

        // Average both legs to cancel curve-pricing skew between them.
        let derived_amount_ftm = (&token1.derived_ftm * &amount1_total
            + &token0.derived_ftm * &amount0_total)
            / BigDecimal::from(2);
        let derived_amount_usd = &derived_amount_ftm * &native.ftm_price_usd;

        let tracked_amount_usd = self
            .pricing
            .tracked_volume_usd(
                &amount0_total,
                &token0,
                &amount1_total,
                &token1,
                &native.ftm_price_usd,
            )
            .await;
        let tracked_amount_ftm = if !native.ftm_price_usd.is_zero() {
            &tracked_amount_usd / &native.ftm_price_usd
        } else {
            BigDecimal::zero()
        };

        token0.trade_volume += &amount0_total;
        token0.trade_volume_usd += &tracked_amount_usd;
        token0.untracked_volume_usd += &derived_amount_usd;
        token0.tx_count += 1;

        token1.trade_volume += &amount1_total;
        token1.trade_volume_usd += &tracked_amount_usd;
        token1.untracked_volume_usd += &derived_amount_usd;
        token1.tx_count += 1;

        pair.volume_usd += &tracked_amount_usd;
        pair.volume_token0 += &amount0_total;
        pair.volume_token1 += &amount1_total;
        pair.untracked_volume_usd += &derived_amount_usd;
        pair.tx_count += 1;

        protocol.total_volume_usd += &tracked_amount_usd;
        protocol.total_volume_ftm += &tracked_amount_ftm;
        protocol.untracked_volume_usd += &derived_amount_usd;
        protocol.tx_count += 1;

        debug!(
            "💾 Swap on pair {}: tracked {} USD, derived {} USD",
            pair.id, tracked_amount_usd, derived_amount_usd
        );

        self.store.save_pair(&pair).await?;
        self.store.save_token(&token0).await?;
        self.store.save_token(&token1).await?;
        self.store.save_protocol_totals(&protocol).await?;

        let mut protocol_day = self
            .day_buckets
            .update_protocol_day_data(&protocol, envelope.timestamp)
            .await?;
        protocol_day.daily_volume_usd += &tracked_amount_usd;
        protocol_day.daily_volume_ftm += &tracked_amount_ftm;
        protocol_day.daily_volume_untracked += &derived_amount_usd;
        self.store.save_protocol_day_data(&protocol_day).await?;

        let mut pair_day = self
            .day_buckets
            .update_pair_day_data(&pair, envelope.timestamp)
            .await?;
        pair_day.daily_volume_token0 += &amount0_total;
        pair_day.daily_volume_token1 += &amount1_total;
        pair_day.daily_volume_usd += &tracked_amount_usd;
        self.store.save_pair_day_data(&pair_day).await?;

        // Day-local token volume is valued at the current derived price,
        // not a trade-time snapshot.
        let mut token0_day = self
            .day_buckets
            .update_token_day_data(&token0, &native, envelope.timestamp)
            .await?;
        token0_day.daily_volume_token += &amount0_total;
        token0_day.daily_volume_ftm += &amount0_total * &token0.derived_ftm;
        token0_day.daily_volume_usd +=
            &amount0_total * &token0.derived_ftm * &native.ftm_price_usd;
        self.store.save_token_day_data(&token0_day).await?;

        let mut token1_day = self
            .day_buckets
            .update_token_day_data(&token1, &native, envelope.timestamp)
            .await?;
        token1_day.daily_volume_token += &amount1_total;
        token1_day.daily_volume_ftm += &amount1_total * &token1.derived_ftm;
        token1_day.daily_volume_usd +=
            &amount1_total * &token1.derived_ftm * &native.ftm_price_usd;
        self.store.save_token_day_data(&token1_day).await?;
        Ok(())
    }

    async fn must_load_pair(&self, id: &str) -> Result<Pair, ProcessorError> {
        self.store
            .load_pair(id)
            .await?
            .ok_or_else(|| ProcessorError::missing(EntityKind::Pair, id))
    }

    async fn must_load_token(&self, id: &str) -> Result<Token, ProcessorError> {
        self.store
            .load_token(id)
            .await?
            .ok_or_else(|| ProcessorError::missing(EntityKind::Token, id))
    }

    /// Loads the working set shared by Sync, Mint, Burn and Swap; every
    /// record must pre-exist.
    async fn load_pair_context(&self, pair_address: &str) -> Result<PairContext, ProcessorError> {
        let pair = self.must_load_pair(pair_address).await?;
        let token0 = self.must_load_token(&pair.token0).await?;
        let token1 = self.must_load_token(&pair.token1).await?;
        let protocol = self
            .store
            .load_protocol_totals(ProtocolTotals::ID)
            .await?
            .ok_or_else(|| {
                ProcessorError::missing(EntityKind::ProtocolTotals, ProtocolTotals::ID)
            })?;
        let native = self
            .store
            .load_native_price(NativePrice::ID)
            .await?
            .ok_or_else(|| ProcessorError::missing(EntityKind::NativePrice, NativePrice::ID))?;
        Ok(PairContext {
            pair,
            token0,
            token1,
            protocol,
            native,
        })
    }
}

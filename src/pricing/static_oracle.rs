use ahash::{AHashMap, AHashSet};
use async_trait::async_trait;
use bigdecimal::{BigDecimal, One, Zero};

use crate::config::indexer_config::PricingConfig;
use crate::db::common::models::Token;
use crate::pricing::constants::{DEFAULT_WHITELIST, WFTM_ADDRESS};
use crate::pricing::PricingOracle;

/// Oracle backed by a fixed derived-price table from configuration.
///
/// Suitable for replay runs where prices are known up front and for tests;
/// a live deployment substitutes a route-finding oracle behind the same
/// trait.
pub struct StaticPriceOracle {
    ftm_price_usd: BigDecimal,
    derived_prices: AHashMap<String, BigDecimal>,
    whitelist: AHashSet<String>,
}

impl StaticPriceOracle {
    pub fn new(
        ftm_price_usd: BigDecimal,
        derived_prices: AHashMap<String, BigDecimal>,
        whitelist: AHashSet<String>,
    ) -> Self {
        StaticPriceOracle {
            ftm_price_usd,
            derived_prices,
            whitelist,
        }
    }

    /// Builds the oracle from the pricing section of the indexer config,
    /// falling back to the stock Fantom whitelist when none is configured.
    pub fn from_config(config: &PricingConfig) -> Self {
        let whitelist: AHashSet<String> = match &config.whitelist {
            Some(list) => list.iter().map(|addr| addr.to_lowercase()).collect(),
            None => DEFAULT_WHITELIST.iter().map(|addr| addr.to_string()).collect(),
        };
        let derived_prices: AHashMap<String, BigDecimal> = config
            .derived_prices
            .iter()
            .map(|(addr, price)| (addr.to_lowercase(), price.clone()))
            .collect();
        Self::new(config.ftm_price_usd.clone(), derived_prices, whitelist)
    }

    fn is_whitelisted(&self, token: &Token) -> bool {
        self.whitelist.contains(&token.id)
    }

    fn derived(&self, token: &Token) -> BigDecimal {
        if token.id == WFTM_ADDRESS {
            return BigDecimal::one();
        }
        self.derived_prices
            .get(&token.id)
            .cloned()
            .unwrap_or_else(BigDecimal::zero)
    }
}

#[async_trait]
impl PricingOracle for StaticPriceOracle {
    async fn ftm_price_usd(&self) -> BigDecimal {
        self.ftm_price_usd.clone()
    }

    async fn derived_ftm_per_token(&self, token: &Token) -> BigDecimal {
        self.derived(token)
    }

    async fn tracked_volume_usd(
        &self,
        amount0: &BigDecimal,
        token0: &Token,
        amount1: &BigDecimal,
        token1: &Token,
        ftm_price: &BigDecimal,
    ) -> BigDecimal {
        let price0 = self.derived(token0) * ftm_price;
        let price1 = self.derived(token1) * ftm_price;

        match (self.is_whitelisted(token0), self.is_whitelisted(token1)) {
            (true, true) => (amount0 * &price0 + amount1 * &price1) / BigDecimal::from(2),
            (true, false) => amount0 * &price0,
            (false, true) => amount1 * &price1,
            (false, false) => BigDecimal::zero(),
        }
    }

    async fn tracked_liquidity_usd(
        &self,
        reserve0: &BigDecimal,
        token0: &Token,
        reserve1: &BigDecimal,
        token1: &Token,
        ftm_price: &BigDecimal,
    ) -> BigDecimal {
        let price0 = self.derived(token0) * ftm_price;
        let price1 = self.derived(token1) * ftm_price;

        match (self.is_whitelisted(token0), self.is_whitelisted(token1)) {
            (true, true) => reserve0 * &price0 + reserve1 * &price1,
            (true, false) => reserve0 * &price0 * BigDecimal::from(2),
            (false, true) => reserve1 * &price1 * BigDecimal::from(2),
            (false, false) => BigDecimal::zero(),
        }
    }
}

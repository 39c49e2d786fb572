use std::path::{Path, PathBuf};

use ahash::AHashMap;
use anyhow::{bail, Context, Result};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Where the replayable pair-event log lives.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StreamConfig {
    /// Path to a JSONL file with one event envelope per line.
    pub events_file: PathBuf,
}

/// Static pricing inputs for the replay oracle.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PricingConfig {
    /// USD price of the native coin applied to the whole run.
    pub ftm_price_usd: BigDecimal,
    /// Tokens whose volume and liquidity count as tracked. Omitting the
    /// field selects the built-in stable set; an empty list disables
    /// tracked accounting entirely.
    #[serde(default)]
    pub whitelist: Option<Vec<String>>,
    /// Native-coin value of one unit of each token, keyed by address.
    #[serde(default)]
    pub derived_prices: AHashMap<String, BigDecimal>,
}

/// A token known before the first event is replayed.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TokenSeed {
    pub address: String,
    pub symbol: String,
    pub decimals: u32,
}

/// A pair contract and the two registered tokens it trades.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PairSeed {
    pub address: String,
    pub token0: String,
    pub token1: String,
}

/// Tokens and pairs to register during bootstrap.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub tokens: Vec<TokenSeed>,
    #[serde(default)]
    pub pairs: Vec<PairSeed>,
}

/// Top-level configuration for one indexer run.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct IndexerConfig {
    pub stream: StreamConfig,
    pub pricing: PricingConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl IndexerConfig {
    /// Reads and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: IndexerConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Structural checks that do not need the entity store.
    ///
    /// Pair-to-token references are deliberately left to bootstrap, which
    /// checks them against the store after seeding.
    pub fn validate(&self) -> Result<()> {
        if self.stream.events_file.as_os_str().is_empty() {
            bail!("stream.events_file must point at a JSONL event log");
        }

        let mut seen_tokens = ahash::AHashSet::new();
        for token in &self.registry.tokens {
            if !seen_tokens.insert(token.address.to_lowercase()) {
                bail!("Duplicate token {} in registry", token.address);
            }
        }

        let mut seen_pairs = ahash::AHashSet::new();
        for pair in &self.registry.pairs {
            if !seen_pairs.insert(pair.address.to_lowercase()) {
                bail!("Duplicate pair {} in registry", pair.address);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const FULL_CONFIG: &str = r#"
stream:
  events_file: events.jsonl
pricing:
  ftm_price_usd: "2"
  whitelist:
    - "0x21be370d5312f44cb42ce377bc9b8a0cef1a4c83"
  derived_prices:
    "0x21be370d5312f44cb42ce377bc9b8a0cef1a4c83": "1"
    "0x04068da6c83afcfa0e13ba15a6696662335d5b75": "0.5"
registry:
  tokens:
    - address: "0x21be370d5312f44cb42ce377bc9b8a0cef1a4c83"
      symbol: WFTM
      decimals: 18
    - address: "0x04068da6c83afcfa0e13ba15a6696662335d5b75"
      symbol: USDC
      decimals: 6
  pairs:
    - address: "0x2b4c76d0dc16be1c31d4c1dc53bf9b45987fc75c"
      token0: "0x21be370d5312f44cb42ce377bc9b8a0cef1a4c83"
      token1: "0x04068da6c83afcfa0e13ba15a6696662335d5b75"
"#;

    #[test]
    fn test_full_config_parses() {
        let config: IndexerConfig = serde_yaml::from_str(FULL_CONFIG).unwrap();
        assert_eq!(config.stream.events_file, PathBuf::from("events.jsonl"));
        assert_eq!(
            config.pricing.ftm_price_usd,
            BigDecimal::from_str("2").unwrap()
        );
        assert_eq!(config.pricing.whitelist.as_ref().unwrap().len(), 1);
        assert_eq!(config.pricing.derived_prices.len(), 2);
        assert_eq!(config.registry.tokens.len(), 2);
        assert_eq!(config.registry.pairs.len(), 1);
        assert_eq!(config.registry.tokens[1].decimals, 6);
        config.validate().unwrap();
        println!("✅ Full YAML config parses and validates");
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let yaml = r#"
stream:
  events_file: events.jsonl
pricing:
  ftm_price_usd: "1.25"
"#;
        let config: IndexerConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.pricing.whitelist.is_none());
        assert!(config.pricing.derived_prices.is_empty());
        assert!(config.registry.tokens.is_empty());
        assert!(config.registry.pairs.is_empty());
        config.validate().unwrap();
        println!("✅ Minimal config defaults registry and whitelist");
    }

    #[test]
    fn test_duplicate_token_is_rejected() {
        let yaml = r#"
stream:
  events_file: events.jsonl
pricing:
  ftm_price_usd: "2"
registry:
  tokens:
    - address: "0xAAA"
      symbol: AAA
      decimals: 18
    - address: "0xaaa"
      symbol: AAA2
      decimals: 18
"#;
        let config: IndexerConfig = serde_yaml::from_str(yaml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate token"));
        println!("✅ Case-insensitive duplicate tokens fail validation");
    }

    #[test]
    fn test_empty_events_file_is_rejected() {
        let yaml = r#"
stream:
  events_file: ""
pricing:
  ftm_price_usd: "2"
"#;
        let config: IndexerConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_err());
        println!("✅ A blank events file path fails validation");
    }
}

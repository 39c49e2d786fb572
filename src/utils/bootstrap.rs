use tracing::info;

use crate::common::error::{EntityKind, ProcessorError};
use crate::config::RegistryConfig;
use crate::db::common::models::{NativePrice, Pair, ProtocolTotals, Token};
use crate::db::entity_store::EntityStore;

/// Seeds the entity store with everything the handlers expect to pre-exist.
///
/// Creates the native price record, the protocol aggregate and every
/// registered token and pair that is not already present. Existing records
/// are left untouched, so re-running against a warm store is safe.
pub async fn check_or_register_genesis_state(
    store: &dyn EntityStore,
    registry: &RegistryConfig,
) -> Result<(), ProcessorError> {
    info!(
        "🚀 Bootstrapping genesis state: {} tokens, {} pairs in registry",
        registry.tokens.len(),
        registry.pairs.len()
    );

    if store.load_native_price(NativePrice::ID).await?.is_none() {
        store.save_native_price(&NativePrice::new()).await?;
        info!("✅ Seeded native price record");
    }

    let mut protocol = match store.load_protocol_totals(ProtocolTotals::ID).await? {
        Some(protocol) => protocol,
        None => {
            let protocol = ProtocolTotals::new();
            store.save_protocol_totals(&protocol).await?;
            info!("✅ Seeded protocol aggregate record");
            protocol
        }
    };

    let mut new_tokens = 0;
    for seed in &registry.tokens {
        let address = seed.address.to_lowercase();
        if store.load_token(&address).await?.is_some() {
            continue;
        }
        let token = Token::new(&address, &seed.symbol, seed.decimals);
        store.save_token(&token).await?;
        info!("✅ Registered token {} ({})", seed.symbol, address);
        new_tokens += 1;
    }

    let mut new_pairs = 0;
    for seed in &registry.pairs {
        let address = seed.address.to_lowercase();
        if store.load_pair(&address).await?.is_some() {
            continue;
        }
        let token0 = seed.token0.to_lowercase();
        let token1 = seed.token1.to_lowercase();
        // A pair may only reference tokens the store already knows.
        if store.load_token(&token0).await?.is_none() {
            return Err(ProcessorError::missing(EntityKind::Token, &token0));
        }
        if store.load_token(&token1).await?.is_none() {
            return Err(ProcessorError::missing(EntityKind::Token, &token1));
        }
        let pair = Pair::new(&address, &token0, &token1);
        store.save_pair(&pair).await?;
        protocol.pair_count += 1;
        info!("✅ Registered pair {} ({} / {})", address, token0, token1);
        new_pairs += 1;
    }
    if new_pairs > 0 {
        store.save_protocol_totals(&protocol).await?;
    }

    // Both singletons must load back before the first event is processed.
    let native = store
        .load_native_price(NativePrice::ID)
        .await?
        .ok_or_else(|| ProcessorError::missing(EntityKind::NativePrice, NativePrice::ID))?;
    let protocol = store
        .load_protocol_totals(ProtocolTotals::ID)
        .await?
        .ok_or_else(|| ProcessorError::missing(EntityKind::ProtocolTotals, ProtocolTotals::ID))?;

    info!(
        "✅ Genesis state ready: {} new tokens, {} new pairs, {} pairs total, FTM at {} USD",
        new_tokens, new_pairs, protocol.pair_count, native.ftm_price_usd
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PairSeed, TokenSeed};
    use crate::db::entity_store::MemoryStore;

    fn registry() -> RegistryConfig {
        RegistryConfig {
            tokens: vec![
                TokenSeed {
                    address: "0xAAA".to_string(),
                    symbol: "AAA".to_string(),
                    decimals: 18,
                },
                TokenSeed {
                    address: "0xbbb".to_string(),
                    symbol: "BBB".to_string(),
                    decimals: 6,
                },
            ],
            pairs: vec![PairSeed {
                address: "0xPA1".to_string(),
                token0: "0xaaa".to_string(),
                token1: "0xBBB".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_fresh_store_gets_fully_seeded() {
        let store = MemoryStore::new();
        check_or_register_genesis_state(&store, &registry())
            .await
            .unwrap();

        assert!(store
            .load_native_price(NativePrice::ID)
            .await
            .unwrap()
            .is_some());
        let token = store.load_token("0xbbb").await.unwrap().unwrap();
        assert_eq!(token.decimals, 6);
        let pair = store.load_pair("0xpa1").await.unwrap().unwrap();
        assert_eq!(pair.token0, "0xaaa");
        assert_eq!(pair.token1, "0xbbb");
        let protocol = store
            .load_protocol_totals(ProtocolTotals::ID)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(protocol.pair_count, 1);
        println!("✅ Bootstrap seeds singletons, tokens and pairs");
    }

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let store = MemoryStore::new();
        check_or_register_genesis_state(&store, &registry())
            .await
            .unwrap();
        check_or_register_genesis_state(&store, &registry())
            .await
            .unwrap();

        let protocol = store
            .load_protocol_totals(ProtocolTotals::ID)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(protocol.pair_count, 1);
        println!("✅ Re-running bootstrap registers nothing twice");
    }

    #[tokio::test]
    async fn test_existing_records_are_not_overwritten() {
        let store = MemoryStore::new();
        let mut token = Token::new("0xaaa", "OLD", 18);
        token.tx_count = 7;
        store.save_token(&token).await.unwrap();

        check_or_register_genesis_state(&store, &registry())
            .await
            .unwrap();

        let token = store.load_token("0xaaa").await.unwrap().unwrap();
        assert_eq!(token.symbol, "OLD");
        assert_eq!(token.tx_count, 7);
        println!("✅ Warm-store records survive bootstrap untouched");
    }

    #[tokio::test]
    async fn test_pair_with_unregistered_token_fails() {
        let store = MemoryStore::new();
        let registry = RegistryConfig {
            tokens: vec![],
            pairs: vec![PairSeed {
                address: "0xpa1".to_string(),
                token0: "0xaaa".to_string(),
                token1: "0xbbb".to_string(),
            }],
        };

        let err = check_or_register_genesis_state(&store, &registry)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ProcessorError::MissingEntity {
                kind: EntityKind::Token,
                ..
            }
        ));
        let protocol = store
            .load_protocol_totals(ProtocolTotals::ID)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(protocol.pair_count, 0);
        println!("✅ Pairs may only reference registered tokens");
    }
}

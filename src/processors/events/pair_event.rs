use serde::{Deserialize, Serialize};
use strum::Display;

/// A decoded pair-contract event together with its canonical chain position.
///
/// Raw integer amounts stay in their decoded decimal-string form until a
/// handler scales them by the owning token's decimals.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EventEnvelope {
    pub block_number: u64,
    pub transaction_index: u32,
    pub log_index: u32,
    /// Block timestamp in epoch seconds.
    pub timestamp: i64,
    /// Lowercase hex address of the emitting pair contract.
    pub pair_address: String,
    pub event: PairEvent,
}

impl EventEnvelope {
    /// Canonical ordering key: block, then transaction index, then log index.
    pub fn key(&self) -> (u64, u32, u32) {
        (self.block_number, self.transaction_index, self.log_index)
    }

    /// Compact `block/tx/log` rendering for ordering diagnostics.
    pub fn position(&self) -> String {
        format!(
            "{}/{}/{}",
            self.block_number, self.transaction_index, self.log_index
        )
    }
}

/// The five pair-contract event kinds, tagged for dispatch.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PairEvent {
    /// Liquidity-token transfer; mints and burns move total supply.
    Transfer {
        from: String,
        to: String,
        value: String,
    },
    /// Reserve update emitted after every state-changing pair operation.
    Sync { reserve0: String, reserve1: String },
    /// Liquidity added; quantities arrive via companion Transfer and Sync.
    Mint,
    /// Liquidity removed; quantities arrive via companion Transfer and Sync.
    Burn,
    /// Trade against the pair's reserves.
    Swap {
        amount0_in: String,
        amount1_in: String,
        amount0_out: String,
        amount1_out: String,
    },
}

impl PairEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            PairEvent::Transfer { .. } => EventKind::Transfer,
            PairEvent::Sync { .. } => EventKind::Sync,
            PairEvent::Mint => EventKind::Mint,
            PairEvent::Burn => EventKind::Burn,
            PairEvent::Swap { .. } => EventKind::Swap,
        }
    }
}

/// Bare event kind, used for counters and log labels.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    Transfer,
    Sync,
    Mint,
    Burn,
    Swap,
}

/// All kinds in dispatch order, for summary reporting.
pub const EVENT_KINDS: [EventKind; 5] = [
    EventKind::Transfer,
    EventKind::Sync,
    EventKind::Mint,
    EventKind::Burn,
    EventKind::Swap,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_tag_by_kind() {
        let event = PairEvent::Sync {
            reserve0: "100".to_string(),
            reserve1: "200".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""kind":"sync""#), "got: {json}");
        assert_eq!(event.kind(), EventKind::Sync);

        let back: PairEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
        println!("✅ Events round-trip under their kind tag");
    }

    #[test]
    fn test_keys_order_block_then_tx_then_log() {
        let envelope = |block, tx, log| EventEnvelope {
            block_number: block,
            transaction_index: tx,
            log_index: log,
            timestamp: 0,
            pair_address: "0xpa1".to_string(),
            event: PairEvent::Mint,
        };
        assert!(envelope(2, 0, 0).key() > envelope(1, 9, 9).key());
        assert!(envelope(1, 1, 0).key() > envelope(1, 0, 9).key());
        assert!(envelope(1, 1, 5).key() > envelope(1, 1, 4).key());
        assert_eq!(envelope(3, 1, 2).position(), "3/1/2");
        println!("✅ Ordering keys compare block, then tx, then log");
    }
}

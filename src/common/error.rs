use strum::Display;
use thiserror::Error;

/// The kinds of records the entity store manages.
///
/// Displayed in snake_case inside error messages so operators can grep a
/// failed run for the exact record that was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    NativePrice,
    Token,
    Pair,
    ProtocolTotals,
    ProtocolDayData,
    PairDayData,
    TokenDayData,
}

/// Errors surfaced by the event pipeline.
///
/// There is no retry policy: every variant aborts the event being processed
/// and halts the run, because advancing past a failed event permanently
/// loses its aggregate contributions.
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// A record expected to pre-exist (registered pair, token, singleton)
    /// was absent from the store.
    #[error("missing {kind} `{id}` in entity store")]
    MissingEntity { kind: EntityKind, id: String },

    /// The event stream delivered an envelope whose canonical key does not
    /// strictly follow the previously committed one.
    #[error("event stream out of order: {offending} delivered after {previous}")]
    OutOfOrder { previous: String, offending: String },

    /// An event could not be decoded into a known envelope shape.
    #[error("malformed event: {message}")]
    MalformedEvent { message: String },

    /// A fallible entity store implementation failed to load or save.
    #[error("entity store failure: {message}")]
    Store { message: String },
}

impl ProcessorError {
    /// Missing-entity constructor used at every load site.
    pub fn missing(kind: EntityKind, id: &str) -> Self {
        ProcessorError::MissingEntity {
            kind,
            id: id.to_string(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ProcessorError::MalformedEvent {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_display_is_snake_case() {
        assert_eq!(EntityKind::NativePrice.to_string(), "native_price");
        assert_eq!(EntityKind::PairDayData.to_string(), "pair_day_data");
        println!("✅ Entity kinds render in snake_case");
    }

    #[test]
    fn test_missing_entity_message_names_kind_and_id() {
        let err = ProcessorError::missing(EntityKind::Pair, "0xabc");
        assert_eq!(err.to_string(), "missing pair `0xabc` in entity store");
        println!("✅ Missing-entity errors carry kind and id");
    }
}

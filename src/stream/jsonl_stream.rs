use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tracing::info;

use crate::common::error::ProcessorError;
use crate::processors::events::pair_event::EventEnvelope;
use crate::stream::EventStream;

/// Replays a newline-delimited JSON event log from disk.
///
/// Each non-blank line holds one serialized [`EventEnvelope`]. Lines are
/// consumed lazily, so logs larger than memory replay fine.
pub struct JsonlEventStream {
    lines: Lines<BufReader<File>>,
    line_number: u64,
}

impl JsonlEventStream {
    pub async fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .await
            .with_context(|| format!("Failed to open events file {}", path.display()))?;
        info!("📥 Replaying pair events from {}", path.display());
        Ok(JsonlEventStream {
            lines: BufReader::new(file).lines(),
            line_number: 0,
        })
    }
}

#[async_trait]
impl EventStream for JsonlEventStream {
    async fn next_event(&mut self) -> Result<Option<EventEnvelope>, ProcessorError> {
        loop {
            let line = self.lines.next_line().await.map_err(|e| {
                ProcessorError::malformed(format!(
                    "line {}: failed to read event log: {}",
                    self.line_number + 1,
                    e
                ))
            })?;
            let line = match line {
                Some(line) => line,
                None => return Ok(None),
            };
            self.line_number += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let envelope: EventEnvelope = serde_json::from_str(trimmed).map_err(|e| {
                ProcessorError::malformed(format!("line {}: {}", self.line_number, e))
            })?;
            return Ok(Some(envelope));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::events::pair_event::PairEvent;
    use tempfile::TempDir;

    async fn stream_over(contents: &str) -> (TempDir, JsonlEventStream) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.jsonl");
        tokio::fs::write(&path, contents).await.unwrap();
        let stream = JsonlEventStream::open(&path).await.unwrap();
        (dir, stream)
    }

    #[tokio::test]
    async fn test_replays_envelopes_in_file_order() {
        let log = concat!(
            r#"{"block_number":10,"transaction_index":0,"log_index":0,"timestamp":1640995200,"pair_address":"0xpa1","event":{"kind":"sync","reserve0":"100","reserve1":"200"}}"#,
            "\n",
            r#"{"block_number":10,"transaction_index":0,"log_index":1,"timestamp":1640995200,"pair_address":"0xpa1","event":{"kind":"swap","amount0_in":"5","amount1_in":"0","amount0_out":"0","amount1_out":"9"}}"#,
            "\n",
        );
        let (_dir, mut stream) = stream_over(log).await;

        let first = stream.next_event().await.unwrap().unwrap();
        assert_eq!(first.block_number, 10);
        assert!(matches!(first.event, PairEvent::Sync { .. }));

        let second = stream.next_event().await.unwrap().unwrap();
        assert_eq!(second.log_index, 1);
        assert!(matches!(second.event, PairEvent::Swap { .. }));

        assert!(stream.next_event().await.unwrap().is_none());
        println!("✅ JSONL replay preserves file order and ends with None");
    }

    #[tokio::test]
    async fn test_blank_lines_are_skipped() {
        let log = concat!(
            "\n",
            r#"{"block_number":1,"transaction_index":0,"log_index":0,"timestamp":0,"pair_address":"0xpa1","event":{"kind":"mint"}}"#,
            "\n",
            "   \n",
        );
        let (_dir, mut stream) = stream_over(log).await;

        let only = stream.next_event().await.unwrap().unwrap();
        assert!(matches!(only.event, PairEvent::Mint));
        assert!(stream.next_event().await.unwrap().is_none());
        println!("✅ Blank lines never surface as events");
    }

    #[tokio::test]
    async fn test_malformed_line_reports_its_number() {
        let log = concat!(
            r#"{"block_number":1,"transaction_index":0,"log_index":0,"timestamp":0,"pair_address":"0xpa1","event":{"kind":"burn"}}"#,
            "\n",
            "{not json}\n",
        );
        let (_dir, mut stream) = stream_over(log).await;

        stream.next_event().await.unwrap().unwrap();
        let err = stream.next_event().await.unwrap_err();
        match err {
            ProcessorError::MalformedEvent { message } => {
                assert!(message.starts_with("line 2:"), "got: {message}");
            }
            other => panic!("expected MalformedEvent, got {other:?}"),
        }
        println!("✅ Malformed lines fail with their line number");
    }

    #[tokio::test]
    async fn test_unknown_event_kind_is_malformed() {
        let log = concat!(
            r#"{"block_number":1,"transaction_index":0,"log_index":0,"timestamp":0,"pair_address":"0xpa1","event":{"kind":"teleport"}}"#,
            "\n",
        );
        let (_dir, mut stream) = stream_over(log).await;

        let err = stream.next_event().await.unwrap_err();
        assert!(matches!(err, ProcessorError::MalformedEvent { .. }));
        println!("✅ Unknown event kinds are rejected at the stream edge");
    }

    #[tokio::test]
    async fn test_empty_file_is_an_empty_run() {
        let (_dir, mut stream) = stream_over("").await;
        assert!(stream.next_event().await.unwrap().is_none());
        println!("✅ An empty log replays as an empty run");
    }
}

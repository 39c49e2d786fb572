// Copyright © Fantom Exchange Indexer Contributors
// SPDX-License-Identifier: Apache-2.0

//! # Event Processors
//!
//! This module contains the core processing logic for replaying decoded
//! pair-contract events and maintaining the exchange-wide aggregate state.
//!
//! ## Main Components
//!
//! ### `exchange_processor`
//! The orchestrator that drives the event stream. It handles:
//! - Strict canonical ordering by (block, transaction, log) position
//! - Dispatch to the per-event handlers
//! - Per-kind event counting and progress reporting
//! - Halting the pipeline at the first failure
//!
//! ### `events`
//! The handlers and their supporting machinery:
//! - **Pair Processor**: Transfer, Sync, Mint, Burn and Swap handlers
//! - **Day Buckets**: Lazily materialized daily snapshots for charting
//! - **Pair Event**: The decoded event model and its stream envelope
//!
//! ## Data Flow
//!
//! ```text
//! Event Stream → ExchangeProcessor → PairProcessor → Entity Store
//!                                          ↓
//!                            DayBucketManager → Day Buckets
//! ```
//!
//! Every handler runs a full read-modify-write cycle against the entity
//! store, so the state between any two events is always consistent.

/// Stream orchestrator that enforces ordering and drives the handlers
pub mod exchange_processor;

/// Event handlers, day buckets and the decoded event model
pub mod events;

pub use exchange_processor::{ExchangeProcessor, RunSummary};

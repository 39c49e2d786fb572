// Copyright © Fantom Exchange Indexer Contributors
// SPDX-License-Identifier: Apache-2.0

//! # Entity Layer
//!
//! This module provides the entity abstraction layer for the exchange
//! indexer: the aggregate record types and the store they live in.
//!
//! ## Architecture
//!
//! The entity layer is organized into:
//! - **Common models**: The aggregate records and day-bucketed snapshots
//! - **Entity store**: The async load/save contract handlers speak, plus the
//!   in-memory implementation used by replay runs and tests
//!
//! ## Record Kinds
//!
//! The indexer maintains seven record kinds:
//! - `native_price`: Singleton USD price of FTM, refreshed on every Sync
//! - `token`: Per-token cumulative volumes, liquidity and derived price
//! - `pair`: Per-pair reserves, cross prices, supply and cumulative volumes
//! - `protocol_totals`: Singleton protocol-wide liquidity and volume totals
//! - `protocol_day_data` / `pair_day_data` / `token_day_data`: Lazily
//!   materialized day buckets keyed by parent identity and day index
//!
//! ## Ownership Contract
//!
//! Loads hand out owned working copies; mutations stay local to the handler
//! until an explicit save writes them back. A record expected to pre-exist
//! that is absent is a fatal inconsistency, never silently re-created.

/// Common entity models and shared data structures
pub mod common;

/// Entity store contract and the in-memory implementation
pub mod entity_store;

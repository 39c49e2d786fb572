// Copyright © Fantom Exchange Indexer Contributors
// SPDX-License-Identifier: Apache-2.0

//! # Fantom Exchange Indexer
//!
//! Incremental aggregation engine for a Uniswap-V2-style exchange on the
//! Fantom blockchain. Consumes decoded pair-contract events (Transfer,
//! Sync, Mint, Burn, Swap) in canonical chain order and maintains running
//! reserves, prices, trading volumes and liquidity for every pair, token
//! and the protocol as a whole, alongside day-bucketed snapshots for
//! charting.
//!
//! ## Architecture
//!
//! ```text
//! EventStream → ExchangeProcessor → PairProcessor → EntityStore
//!                                        ↓
//!                                 PricingOracle
//! ```
//!
//! The engine is storage- and pricing-agnostic: implementations plug in
//! behind the [`db::entity_store::EntityStore`] and
//! [`pricing::PricingOracle`] traits.

pub mod common;
pub mod config;
pub mod db;
pub mod pricing;
pub mod processors;
pub mod stream;
pub mod utils;

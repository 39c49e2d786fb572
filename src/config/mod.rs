// Copyright © Fantom Exchange Indexer Contributors
// SPDX-License-Identifier: Apache-2.0

//! # Configuration Management
//!
//! This module handles all configuration aspects of the exchange indexer,
//! including the event stream source, pricing tables, and the token and
//! pair registry.
//!
//! ## Configuration Structure
//!
//! The configuration system is hierarchical:
//! - **IndexerConfig**: Top-level configuration container
//! - **StreamConfig**: Event stream source settings
//! - **PricingConfig**: Native price, derived-price table and whitelist
//! - **RegistryConfig**: Tokens and pairs known at startup
//!
//! ## Configuration Sources
//!
//! Configuration can be loaded from:
//! - YAML configuration files (primary method)
//! - Command-line arguments (for the config file path)
//!
//! ## Validation
//!
//! All configuration values are validated at startup to ensure:
//! - The events file path is present
//! - Registered pairs reference registered tokens
//! - Price tables only contain parseable decimals

/// Top-level indexer configuration including all subsystem settings
pub mod indexer_config;

pub use indexer_config::{
    IndexerConfig, PairSeed, PricingConfig, RegistryConfig, StreamConfig, TokenSeed,
};

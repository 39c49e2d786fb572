// Copyright © Fantom Exchange Indexer Contributors
// SPDX-License-Identifier: Apache-2.0

//! # Utility Functions and Shared Components
//!
//! This module contains utility functions and shared components used
//! throughout the exchange indexer for numeric conversion and startup
//! seeding.
//!
//! ## Key Components
//!
//! ### Numeric Conversion (`convert`)
//! - Parses raw on-chain integer amounts from decimal strings
//! - Places the scale point exactly, with no rounding
//!
//! ### Genesis Bootstrap (`bootstrap`)
//! - Seeds the native price and protocol aggregate singletons
//! - Registers configured tokens and pairs on first run
//! - Safe to re-run against a warm store

/// Raw amount parsing and decimal scaling
pub mod convert;

/// Startup seeding of singletons, tokens and pairs
pub mod bootstrap;

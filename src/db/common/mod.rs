// Copyright © Fantom Exchange Indexer Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared entity models used by every store implementation.

/// Aggregate and day-bucket record definitions
pub mod models;

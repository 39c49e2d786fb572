// Copyright © Fantom Exchange Indexer Contributors
// SPDX-License-Identifier: Apache-2.0

//! # Common Utilities and Shared Components
//!
//! This module contains shared components used across different parts of the
//! exchange indexer.
//!
//! ## Components
//!
//! ### Error Taxonomy
//! - `ProcessorError`: the single error surface shared by the entity store,
//!   the event stream and every event handler
//! - `EntityKind`: the vocabulary of record kinds the store manages, used to
//!   report exactly which record a failed load was missing
//!
//! A missing pre-existing record is fatal for the event being processed:
//! fabricating a zero-valued replacement would silently corrupt every
//! downstream aggregate total, so the pipeline halts instead.

/// Crate-wide error enum and the entity-kind vocabulary it reports on
pub mod error;

pub use error::{EntityKind, ProcessorError};

//! Constants used throughout the Galleria library.
//!
//! This module provides central definitions for the numeric parameters of the
//! ordering scheme, so the engine and store backends agree on spacing.

/// First order value assigned when a rebalance pass re-spaces a run of items.
pub const REBALANCE_BASE_ORDER: f64 = 1000.0;

/// Stride between consecutive items written by a rebalance pass.
pub const REBALANCE_SPACING: f64 = 100.0;

/// Gap left when an item is moved past the current global minimum or maximum.
pub const END_GAP: f64 = 100.0;

/// Stride between consecutive order values seeded for newly appended items.
pub const APPEND_SPACING: f64 = 1000.0;

// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters that resolve host geometry into dropdown input.
//!
//! Each adapter is gated behind a feature flag to keep the core state machine lightweight and
//! `no_std` by default.
//!
//! ## Available Adapters
//!
//! - `rows` (`kurbo_adapter` feature): resolve a `kurbo::Point` against a panel of
//!   fixed-height option rows into a [`PointerHit`](crate::PointerHit).

#[cfg(feature = "kurbo_adapter")]
pub mod rows;

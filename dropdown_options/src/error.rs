// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Reasons a flat option list cannot be turned into an [`Options`](crate::Options) zipper.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OptionsError {
    /// The list had no options; a dropdown always needs a selected option.
    Empty,
    /// The requested selection index lies outside the list.
    IndexOutOfBounds {
        /// Requested selection index.
        index: usize,
        /// Number of options in the list.
        len: usize,
    },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("option list is empty"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "selection index {index} is out of bounds for {len} options")
            }
        }
    }
}

impl core::error::Error for OptionsError {}
